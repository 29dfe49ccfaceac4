/// How far down the document the viewport is, in percent.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-30.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_documents_have_no_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    }
}
