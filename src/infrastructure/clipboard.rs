pub struct SystemClipboard;

impl SystemClipboard {
    /// Puts `text` on the system clipboard.
    pub fn copy(text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text.to_string()).map_err(|e| e.to_string())
    }
}
