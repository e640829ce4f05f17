//! Text input for the focused field on the device

use super::device::{settle, AdbDevice};
use crate::config::TIMING_CONFIG;
use crate::error::Result;

/// Escape text for a double-quoted argument of the device shell
pub fn escape_input_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

impl AdbDevice {
    /// Type text into the currently focused input field
    pub async fn send_keys(&self, text: &str) -> Result<()> {
        let quoted = format!("\"{}\"", escape_input_text(text));
        self.run(&["shell", "input", "text", quoted.as_str()]).await?;

        settle(TIMING_CONFIG.input.key_delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text() {
        assert_eq!(escape_input_text("hello world"), "hello world");
    }

    #[test]
    fn test_escape_shell_specials() {
        assert_eq!(escape_input_text(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_input_text("$HOME"), r"\$HOME");
        assert_eq!(escape_input_text("`id`"), r"\`id\`");
    }

    #[test]
    fn test_escape_backslash_before_quote() {
        assert_eq!(escape_input_text(r#"a\"b"#), r#"a\\\"b"#);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_send_keys_quotes_text() {
        let adb = crate::adb::fake_adb::FakeAdb::new("");
        adb.device().send_keys(r#"say "hi" $USER"#).await.unwrap();
        assert_eq!(
            adb.calls().last().unwrap(),
            r#"shell input text "say \"hi\" \$USER""#
        );
    }
}
