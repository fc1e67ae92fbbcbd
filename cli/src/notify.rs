//! Terminal adapters for the api crate's notice and navigation seams.

use api::{Navigator, Notice, NoticeLevel, Notifier};

/// Prints notices to stderr so stdout stays machine-readable JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

pub fn render_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Info => "info",
        NoticeLevel::Error => "error",
    };
    format!("[{tag}] {}", notice.message)
}

impl Notifier for StderrNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", render_notice(&notice));
    }
}

/// There is no login view to move to; tell the user how to get one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginHint;

pub const LOGIN_HINT: &str = "run `menu-cli login <username> <password>` to sign in again";

impl Navigator for LoginHint {
    fn redirect_to_login(&self) {
        eprintln!("{LOGIN_HINT}");
    }
}
