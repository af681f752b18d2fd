/// Fraction of the remaining distance covered each animation frame.
pub const CURSOR_EASING: f64 = 0.2;

/// Milliseconds after the last scroll event before the cursor leaves its scrolling pose.
pub const SCROLL_SETTLE_MS: u64 = 150;

/// Tags that make the cursor switch to its hover pose.
const INTERACTIVE_TAGS: [&str; 5] = ["a", "button", "input", "select", "textarea"];

/// CSS selector matching an element or ancestor that counts as interactive.
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, select, textarea, [role]";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Position and pose of the decorative cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorModel {
    pub position: Point,
    pub target: Point,
    pub hovering: bool,
    pub clicking: bool,
    pub scrolling: bool,
}

impl CursorModel {
    /// Ease the drawn position toward the pointer by one frame
    pub fn step(&mut self) {
        self.position.x = lerp(self.position.x, self.target.x, CURSOR_EASING);
        self.position.y = lerp(self.position.y, self.target.y, CURSOR_EASING);
    }

    pub const fn size_px(&self) -> u32 {
        if self.hovering {
            50
        } else {
            40
        }
    }

    pub fn css_class(&self) -> String {
        let mut class = String::from("custom-cursor");
        for (on, name) in [
            (self.hovering, "hovering"),
            (self.clicking, "clicking"),
            (self.scrolling, "scrolling"),
        ] {
            if on {
                class.push(' ');
                class.push_str(name);
            }
        }
        class
    }
}

fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    (end - start).mul_add(factor, start)
}

/// Whether an element with this tag name is interactive on its own
pub fn is_interactive_tag(tag: &str) -> bool {
    INTERACTIVE_TAGS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_covers_a_fifth_of_the_distance() {
        let mut cursor = CursorModel {
            target: Point { x: 100.0, y: -50.0 },
            ..CursorModel::default()
        };
        cursor.step();
        assert!((cursor.position.x - 20.0).abs() < 1e-9);
        assert!((cursor.position.y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_converges_on_target() {
        let mut cursor = CursorModel {
            target: Point { x: 300.0, y: 200.0 },
            ..CursorModel::default()
        };
        for _ in 0..100 {
            cursor.step();
        }
        assert!((cursor.position.x - 300.0).abs() < 0.01);
        assert!((cursor.position.y - 200.0).abs() < 0.01);
    }

    #[test]
    fn test_pose_classes_and_size() {
        let mut cursor = CursorModel::default();
        assert_eq!(cursor.css_class(), "custom-cursor");
        assert_eq!(cursor.size_px(), 40);

        cursor.hovering = true;
        cursor.scrolling = true;
        assert_eq!(cursor.css_class(), "custom-cursor hovering scrolling");
        assert_eq!(cursor.size_px(), 50);
    }

    #[test]
    fn test_interactive_tags() {
        assert!(is_interactive_tag("BUTTON"));
        assert!(is_interactive_tag("a"));
        assert!(!is_interactive_tag("div"));
    }
}
