//! Local identity for the AquaOS login screen
//!
//! A small fixed-capacity credential store. Users are created at boot
//! (the default `root` account, plus any the shell adds) and checked by
//! the login overlay before the desktop is shown.
//!
//! Passwords never live in the store in clear text; only their SHA-256
//! digests are kept.
//!
//! ```rust
//! use aqua_identity::CredentialStore;
//!
//! let mut store = CredentialStore::with_default_user();
//! assert!(store.verify_login("root", "root").is_ok());
//! assert_eq!(store.current_user(), Some("root"));
//! ```

pub mod crypto;
pub mod error;
pub mod store;

pub use crypto::PasswordDigest;
pub use error::{AuthError, AuthResult};
pub use store::{CredentialStore, UserRecord, MAX_PASSWORD_LEN, MAX_USERNAME_LEN, MAX_USERS};
