use crate::{
    error::TransportError,
    lcd::{Lcd, FRAME_CAPACITY, LINE_CAPACITY, LINE_COUNT},
    sender::SendCommand,
};

/// Up to one screen of text: bytes 0..16 are line 0, bytes 16..32 are line 1
///
/// Anything past 32 bytes is dropped when the frame is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextFrame<'a> {
    bytes: &'a [u8],
}

impl<'a> TextFrame<'a> {
    #[allow(missing_docs)]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes: &bytes[..bytes.len().min(FRAME_CAPACITY)],
        }
    }

    /// Characters shown on `line`, empty for a line past the text or past the screen
    pub fn line(&self, line: usize) -> &'a [u8] {
        if line >= LINE_COUNT {
            return &[];
        }
        let start = (line * LINE_CAPACITY).min(self.bytes.len());
        let end = (start + LINE_CAPACITY).min(self.bytes.len());
        &self.bytes[start..end]
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl<Sender: SendCommand> Lcd<Sender> {
    /// Replace the whole screen with `text`
    ///
    /// Clears and homes first, so an empty `text` leaves a blank screen.
    /// Bytes past the 32nd are ignored.
    pub fn render(&mut self, text: &[u8]) -> Result<(), TransportError> {
        let frame = TextFrame::new(text);
        log::trace!("render {} bytes", frame.len());

        self.clean_display()?;
        self.return_home()?;

        for &byte in frame.line(0) {
            self.write_u8_to_cur(byte)?;
        }

        let second = frame.line(1);
        if !second.is_empty() {
            self.set_cursor_to_line(1)?;
            for &byte in second {
                self.write_u8_to_cur(byte)?;
            }
        }

        Ok(())
    }
}
