//! User-facing texts.

use relay_core::User;

pub const ADMIN_GREETING: &str = "Hello Admin! Answer users by replying to the messages they send.";

pub const USER_GREETING: &str =
    "Hello! Write your order or question.\nThe admin will answer you through the bot.";

/// Label of the single reply-keyboard button shown to users on /start.
pub const ORDER_BUTTON: &str = "Send order";

pub const FORWARD_OK: &str = "✅ Your message was sent to the admin. You will get an answer soon.";

pub const FORWARD_FAILED: &str = "❌ Something went wrong. Please try again.";

pub const REPLY_FAILED: &str = "❌ Failed to send. The user may have blocked the bot.";

pub const REPLY_UNMAPPED: &str =
    "⚠️ This message cannot be answered. Reply only to messages forwarded from users.";

pub const ADMIN_REPLY_HINT: &str =
    "ℹ️ To answer a user, REPLY to their message (tap the reply button).";

const NO_USERNAME: &str = "(no username)";

pub fn chat_id(user_id: i64) -> String {
    format!("Your chat ID: {}", user_id)
}

pub fn reply_sent(user_id: i64) -> String {
    format!("✅ Reply sent → User ID: {}", user_id)
}

/// Admin-facing copy of a user message, annotated with who sent it.
pub fn forwarded(user: &User, text: &str) -> String {
    format!(
        "📩 New message:\n\n\
         👤 User: {}\n\
         🆔 ID: {}\n\
         📱 Username: {}\n\n\
         💬 Message:\n{}\n\n\
         ➡️ Reply to this message to answer.",
        user.full_name(),
        user.id,
        user.mention().unwrap_or_else(|| NO_USERNAME.to_string()),
        text
    )
}
