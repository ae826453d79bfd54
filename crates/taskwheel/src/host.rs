use petals::{LayoutError, Page, ReadySignal, Selectors};

/// Startup sequence of a loaded page: the wheel initializer is registered once on
/// the page's ready signal, which then fires.
pub fn ready_page(page: &mut Page, selectors: &Selectors) -> Result<usize, LayoutError> {
    let mut placed = 0;
    let mut ready: ReadySignal<'_, Page> = ReadySignal::new();

    ready.on_ready(|page| {
        placed = page.initialize_task_wheel(selectors)?;
        Ok(())
    });

    match ready.fire(page).into_iter().next() {
        Some(e) => Err(e),
        None => {
            log::info!("Placed {} petals", placed);
            Ok(placed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_page;
    use config::FileFormat;
    use petals::{Node, Placement};

    const WHEEL_PAGE: &str = r#"
[[nodes]]
classes = ["wheel"]
width = 400
height = 400

[[nodes]]
classes = ["task-petal"]
width = 50
height = 50

[[nodes]]
classes = ["task-petal"]
width = 50
height = 50
"#;

    #[test]
    fn test_ready_page_places_petals() {
        let mut page = parse_page(WHEEL_PAGE, FileFormat::Toml).unwrap();

        assert_eq!(ready_page(&mut page, &Selectors::default()), Ok(2));
        assert_eq!(page.nodes[1].placement, Some(Placement::new(375.0, 175.0)));
        assert_eq!(page.nodes[2].placement.unwrap().rounded(), (-25, 175));
    }

    #[test]
    fn test_ready_page_twice_is_stable() {
        let mut page = parse_page(WHEEL_PAGE, FileFormat::Toml).unwrap();

        ready_page(&mut page, &Selectors::default()).unwrap();
        let first = page.clone();
        ready_page(&mut page, &Selectors::default()).unwrap();

        assert_eq!(page, first);
    }

    #[test]
    fn test_ready_page_without_wheel() {
        let mut page = Page::new(vec![Node::new(&["task-petal"], 50.0, 50.0)]);

        assert!(matches!(
            ready_page(&mut page, &Selectors::default()),
            Err(LayoutError::MissingWheel(_))
        ));
        assert_eq!(page.nodes[0].placement, None);
    }
}
