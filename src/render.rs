//! Pure mapping from [`PresentationState`] to what should be on screen. The DOM
//! layer only copies a [`Frame`] onto elements; all decisions live here.

use crate::state::PresentationState;

pub const CLASS_KEY_DISPLAY: &str = "key-display";
pub const CLASS_MASCOT_DISPLAY: &str = "vehicle-display";
pub const CLASS_MASCOT: &str = "vehicle";
pub const CLASS_MASCOT_IMAGE: &str = "vehicle-image";
pub const CLASS_MASCOT_NAME: &str = "vehicle-name";
pub const CLASS_ANIMATED: &str = "animated";

pub const TITLE: &str = "알파벳과 숫자 키보드 게임";
pub const SUBTITLE: &str = "아무 키나 눌러보세요!";
pub const GAME_AREA_LABEL: &str = "키보드 놀이 화면";
pub const INSTRUCTION_TITLE: &str = "어떻게 놀아요?";
/// (badge, text, badge modifier class)
pub const INSTRUCTIONS: [(&str, &str, &str); 2] = [
    ("A-Z, 0-9", "키를 눌러 알파벳과 숫자를 봐요!", ""),
    ("다른 키", "여러 종류의 버스가 나와요!", "green"),
];
pub const KEYBOARD_BUTTON_LABEL: &str = "⌨️ 키보드 열기";
pub const HINT_KEYBOARD_OPEN: &str = "글자를 눌러보세요! 엔터를 누르면 버스가 나와요.";
pub const HINT_KEYBOARD_CLOSED: &str = "화면을 터치하면 키보드가 열려요.";

const ANIMATED_SCALE: f64 = 1.2;

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub text: String,
    pub color: &'static str,
    pub animated: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MascotView {
    pub image: &'static str,
    pub label: &'static str,
    pub left_px: i32,
    pub scale: f64,
    pub animated: bool,
}

impl MascotView {
    /// Inline style for the positioned wrapper: centred on `left_px`.
    pub fn wrapper_style(&self) -> String {
        format!("left:{}px; transform:translateX(-50%);", self.left_px)
    }

    pub fn image_style(&self) -> String {
        format!("transform:scale({});", self.scale)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MobilePanel {
    pub button_label: &'static str,
    pub hint: &'static str,
    pub keyboard_open: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub background: &'static str,
    pub glyph: Option<Glyph>,
    pub mascot: Option<MascotView>,
    pub mobile: Option<MobilePanel>,
}

/// Class attribute for an element that gains `animated` while animating.
pub fn class_list(base: &str, animated: bool) -> String {
    if animated {
        format!("{} {}", base, CLASS_ANIMATED)
    } else {
        base.to_string()
    }
}

pub fn render(state: &PresentationState) -> Frame {
    let glyph = state.last_key.map(|c| Glyph {
        text: c.to_ascii_uppercase().to_string(),
        color: state.text_color,
        animated: state.animating,
    });
    let mascot = state.mascot_visible.then(|| MascotView {
        image: state.mascot.image(),
        label: state.mascot.label(),
        left_px: state.mascot_position,
        scale: if state.animating { ANIMATED_SCALE } else { 1.0 },
        animated: state.animating,
    });
    let mobile = state.is_mobile_layout.then(|| MobilePanel {
        button_label: KEYBOARD_BUTTON_LABEL,
        hint: if state.virtual_keyboard_open {
            HINT_KEYBOARD_OPEN
        } else {
            HINT_KEYBOARD_CLOSED
        },
        keyboard_open: state.virtual_keyboard_open,
    });
    Frame {
        background: state.background_color,
        glyph,
        mascot,
        mobile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::palette::Mascot;

    #[test]
    fn test_idle_frame() {
        let s = PresentationState::initial(1280, &GameConfig::default());
        let f = render(&s);
        assert_eq!(f.background, "#f8f9fa");
        assert!(f.glyph.is_none());
        assert!(f.mascot.is_none());
        assert!(f.mobile.is_none());
    }

    #[test]
    fn test_mascot_frame_scales_while_animating() {
        let mut s = PresentationState::initial(1280, &GameConfig::default());
        s.mascot_visible = true;
        s.mascot = Mascot::Gani;
        s.mascot_position = 640;
        s.animating = true;
        let m = render(&s).mascot.unwrap();
        assert_eq!(m.label, "가니");
        assert_eq!(m.image, "images/gani.png");
        assert_eq!(m.scale, 1.2);
        assert_eq!(m.wrapper_style(), "left:640px; transform:translateX(-50%);");
        s.animating = false;
        assert_eq!(render(&s).mascot.unwrap().image_style(), "transform:scale(1);");
    }

    #[test]
    fn test_mobile_hint_follows_keyboard_flag() {
        let mut s = PresentationState::initial(390, &GameConfig::default());
        assert_eq!(render(&s).mobile.unwrap().hint, HINT_KEYBOARD_CLOSED);
        s.virtual_keyboard_open = true;
        assert_eq!(render(&s).mobile.unwrap().hint, HINT_KEYBOARD_OPEN);
    }

    #[test]
    fn test_class_list() {
        assert_eq!(class_list(CLASS_KEY_DISPLAY, true), "key-display animated");
        assert_eq!(class_list(CLASS_KEY_DISPLAY, false), "key-display");
    }
}
