//! Image sizing inside the widget frame.

/// Vertical space kept for the quote and the control bar.
pub const CONTROL_BAR_ALLOWANCE: u32 = 60;

/// Images are never drawn taller than this.
pub const MAX_IMAGE_HEIGHT: u32 = 150;

/// Horizontal space kept free around the image.
pub const SIDE_MARGIN: u32 = 20;

/// Compute the drawn size of an `image` (`width, height`) inside a window of
/// size `window`, preserving the aspect ratio.
///
/// Height is fitted first; when the result is too wide, width is fitted
/// instead. Returns `None` when either dimension collapses to zero, in which
/// case the caller shows the placeholder label.
pub fn fit_image(image: (u32, u32), window: (u32, u32)) -> Option<(u32, u32)> {
    let (img_w, img_h) = image;
    let (win_w, win_h) = window;
    if img_w == 0 || img_h == 0 {
        return None;
    }

    let aspect = f64::from(img_w) / f64::from(img_h);

    let mut height = win_h.saturating_sub(CONTROL_BAR_ALLOWANCE).min(MAX_IMAGE_HEIGHT);
    let mut width = (f64::from(height) * aspect) as u32;

    let max_width = win_w.saturating_sub(SIDE_MARGIN);
    if width > max_width {
        width = max_width;
        height = (f64::from(width) / aspect) as u32;
    }

    if width == 0 || height == 0 {
        None
    } else {
        Some((width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_image_capped_at_max_height() {
        assert_eq!(fit_image((100, 100), (250, 350)), Some((150, 150)));
    }

    #[test]
    fn test_short_window_limits_height() {
        assert_eq!(fit_image((100, 100), (300, 200)), Some((140, 140)));
    }

    #[test]
    fn test_wide_image_fitted_to_width() {
        // 4:1 image; 150 tall would be 600 wide, so width wins.
        assert_eq!(fit_image((400, 100), (250, 350)), Some((230, 57)));
    }

    #[test]
    fn test_degenerate_image_has_no_size() {
        assert_eq!(fit_image((0, 10), (250, 350)), None);
        assert_eq!(fit_image((1, 1000), (200, 200)), None);
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        let (w, h) = fit_image((1920, 1080), (400, 400)).unwrap();
        let ratio = w as f64 / h as f64;
        assert!((ratio - 1920.0 / 1080.0).abs() < 0.02);
        assert!(w <= 380 && h <= MAX_IMAGE_HEIGHT);
    }
}
