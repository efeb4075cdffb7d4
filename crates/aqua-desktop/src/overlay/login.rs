//! Full-screen sign-in form.

use aqua_identity::CredentialStore;
use tracing::{info, warn};

use super::Overlay;
use crate::input::KeySymbol;
use crate::math::{Point, Rect, Size};
use crate::render::{theme, Canvas};

/// Longest value either field accepts, in characters
pub const MAX_FIELD_LEN: usize = 63;

/// Shown after a rejected submit
pub const LOGIN_FAILED: &str = "Invalid username or password";

/// Which input box has the keyboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Form layout, all relative to the screen center
#[derive(Clone, Copy, Debug)]
struct Layout {
    center: Point,
}

impl Layout {
    fn at(&self, dx: i32, dy: i32) -> Point {
        self.center + Point::new(dx, dy)
    }

    fn avatar(&self) -> Rect {
        Rect::new(self.center.x - 40, self.center.y - 120, 80, 80)
    }

    fn username_box(&self) -> Rect {
        Rect::new(self.center.x - 100, self.center.y, 200, 32)
    }

    fn password_box(&self) -> Rect {
        Rect::new(self.center.x - 100, self.center.y + 70, 200, 32)
    }

    fn login_button(&self) -> Rect {
        Rect::new(self.center.x - 50, self.center.y + 120, 100, 36)
    }
}

/// Username/password form backed by a [`CredentialStore`]
///
/// Stays up until a submit verifies; the session then drops it and brings
/// up the desktop.
#[derive(Debug)]
pub struct LoginOverlay {
    store: CredentialStore,
    username: String,
    password: String,
    focus: LoginField,
    error: Option<&'static str>,
    dismissed: bool,
    layout: Layout,
}

impl LoginOverlay {
    /// Create the form centered on a screen of the given size
    pub fn new(store: CredentialStore, screen: Size) -> Self {
        Self {
            store,
            username: String::new(),
            password: String::new(),
            focus: LoginField::Username,
            error: None,
            dismissed: false,
            layout: Layout {
                center: Point::new(screen.width / 2, screen.height / 2),
            },
        }
    }

    /// Typed username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Number of password characters typed
    pub fn password_len(&self) -> usize {
        self.password.chars().count()
    }

    /// Field holding the keyboard
    pub fn focus(&self) -> LoginField {
        self.focus
    }

    /// Message from the last failed submit
    pub fn error(&self) -> Option<&str> {
        self.error
    }

    /// Credential store, including the logged-in user once verified
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Give the credential store back
    pub fn into_store(self) -> CredentialStore {
        self.store
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    fn submit(&mut self) {
        match self.store.verify_login(&self.username, &self.password) {
            Ok(()) => {
                info!(username = %self.username, "login succeeded");
                self.error = None;
                self.dismissed = true;
            }
            Err(e) => {
                warn!(username = %self.username, error = %e, "login failed");
                self.error = Some(LOGIN_FAILED);
                self.password.clear();
            }
        }
    }

    fn paint_field(&self, canvas: &mut dyn Canvas, rect: Rect, focused: bool) {
        canvas.fill_rect(rect, theme::WHITE);
        canvas.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1), theme::FIELD_BORDER);
        canvas.fill_rect(
            Rect::new(rect.x, rect.bottom() - 1, rect.width, 1),
            theme::FIELD_BORDER,
        );
        if focused {
            canvas.fill_rect(
                Rect::new(rect.x, rect.bottom() - 1, rect.width, 2),
                theme::ACCENT_BLUE,
            );
        }
    }
}

impl Overlay for LoginOverlay {
    fn handle_key(&mut self, key: KeySymbol) {
        match key {
            KeySymbol::Newline => match self.focus {
                LoginField::Username => self.focus = LoginField::Password,
                LoginField::Password => self.submit(),
            },
            KeySymbol::Backspace => {
                self.focused_mut().pop();
            }
            KeySymbol::Tab => {
                self.focus = match self.focus {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
            }
            KeySymbol::Char(c) => {
                let field = self.focused_mut();
                if field.chars().count() < MAX_FIELD_LEN {
                    field.push(c);
                }
            }
        }
    }

    fn handle_click(&mut self, p: Point) {
        if self.layout.username_box().contains(p) {
            self.focus = LoginField::Username;
        } else if self.layout.password_box().contains(p) {
            self.focus = LoginField::Password;
        } else if self.layout.login_button().contains(p) {
            self.submit();
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        let l = self.layout;

        canvas.draw_text(l.at(-40, -200), "AquaOS", theme::TEXT_PRIMARY);
        canvas.fill_rect(l.avatar(), theme::ACCENT_BLUE);

        canvas.draw_text(l.at(-100, -20), "Username:", theme::TEXT_PRIMARY);
        self.paint_field(canvas, l.username_box(), self.focus == LoginField::Username);
        canvas.draw_text(l.at(-90, 10), &self.username, theme::TEXT_PRIMARY);

        canvas.draw_text(l.at(-100, 50), "Password:", theme::TEXT_PRIMARY);
        self.paint_field(canvas, l.password_box(), self.focus == LoginField::Password);
        let masked = "*".repeat(self.password_len());
        canvas.draw_text(l.at(-90, 80), &masked, theme::TEXT_PRIMARY);

        canvas.fill_rect(l.login_button(), theme::ACCENT_BLUE);
        canvas.draw_text(l.at(-20, 130), "Login", theme::WHITE);

        if let Some(message) = self.error {
            canvas.draw_text(l.at(-80, 170), message, theme::ERROR_RED);
        }
    }

    fn is_dismissed(&self) -> bool {
        self.dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> LoginOverlay {
        LoginOverlay::new(CredentialStore::with_default_user(), Size::new(800, 600))
    }

    fn type_str(overlay: &mut LoginOverlay, text: &str) {
        for c in text.chars() {
            overlay.handle_key(KeySymbol::Char(c));
        }
    }

    #[test]
    fn test_keyboard_login() {
        let mut login = overlay();
        type_str(&mut login, "root");
        login.handle_key(KeySymbol::Newline);
        assert_eq!(login.focus(), LoginField::Password);
        assert!(!login.is_dismissed());

        type_str(&mut login, "root");
        login.handle_key(KeySymbol::Newline);
        assert!(login.is_dismissed());
        assert_eq!(login.store().current_user(), Some("root"));
    }

    #[test]
    fn test_failed_login_clears_password() {
        let mut login = overlay();
        type_str(&mut login, "root");
        login.handle_key(KeySymbol::Tab);
        type_str(&mut login, "wrong");
        login.handle_key(KeySymbol::Newline);

        assert!(!login.is_dismissed());
        assert_eq!(login.error(), Some(LOGIN_FAILED));
        assert_eq!(login.password_len(), 0);
        assert_eq!(login.username(), "root");
        assert_eq!(login.focus(), LoginField::Password);
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut login = overlay();
        type_str(&mut login, "rooot");
        login.handle_key(KeySymbol::Backspace);
        login.handle_key(KeySymbol::Backspace);
        type_str(&mut login, "t");
        assert_eq!(login.username(), "root");

        login.handle_key(KeySymbol::Tab);
        login.handle_key(KeySymbol::Backspace);
        assert_eq!(login.username(), "root");
        assert_eq!(login.password_len(), 0);
    }

    #[test]
    fn test_field_length_bound() {
        let mut login = overlay();
        type_str(&mut login, &"u".repeat(100));
        assert_eq!(login.username().len(), MAX_FIELD_LEN);
    }

    #[test]
    fn test_clicks_focus_and_submit() {
        let mut login = overlay();
        type_str(&mut login, "root");

        login.handle_click(Point::new(400, 380));
        assert_eq!(login.focus(), LoginField::Password);
        type_str(&mut login, "root");

        login.handle_click(Point::new(400, 310));
        assert_eq!(login.focus(), LoginField::Username);

        // Outside every control
        login.handle_click(Point::new(10, 10));
        assert!(!login.is_dismissed());

        login.handle_click(Point::new(400, 430));
        assert!(login.is_dismissed());
    }

    #[test]
    fn test_login_button_with_empty_fields() {
        let mut login = overlay();
        login.handle_click(Point::new(400, 430));
        assert!(!login.is_dismissed());
        assert_eq!(login.error(), Some(LOGIN_FAILED));
    }
}
