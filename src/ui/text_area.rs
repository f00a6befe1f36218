use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Submit,
    Cancel,
}

/// Small multi-line editor used to rewrite a category's choices, one per
/// line. `Enter` breaks the line, `Ctrl-S` submits, `Esc` cancels.
pub struct TextArea {
    lines: Vec<String>,
    row: usize,
    /// Cursor column as a char index into `lines[row]`.
    col: usize,
}

impl TextArea {
    /// Cursor starts at the end of the text.
    pub fn new(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        let row = lines.len() - 1;
        let col = lines[row].chars().count();
        Self { lines, row, col }
    }

    pub fn value(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn handle(&mut self, key: KeyEvent) -> InputResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Char('s') if ctrl => return InputResult::Submit,
            KeyCode::Enter => self.break_line(),

            KeyCode::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = self.line_len();
                }
            }
            KeyCode::Right => {
                if self.col < self.line_len() {
                    self.col += 1;
                } else if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = 0;
                }
            }
            KeyCode::Up => {
                if self.row > 0 {
                    self.row -= 1;
                    self.col = self.col.min(self.line_len());
                }
            }
            KeyCode::Down => {
                if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = self.col.min(self.line_len());
                }
            }
            KeyCode::Home => self.col = 0,
            KeyCode::End => self.col = self.line_len(),
            KeyCode::Char('a') if ctrl => self.col = 0,
            KeyCode::Char('e') if ctrl => self.col = self.line_len(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Char('u') if ctrl => {
                self.lines[self.row].clear();
                self.col = 0;
            }
            KeyCode::Char('w') if ctrl => self.delete_word_back(),
            KeyCode::Char(ch) if !ctrl => {
                let byte_offset = self.char_to_byte(self.col);
                self.lines[self.row].insert(byte_offset, ch);
                self.col += 1;
            }
            _ => {}
        }
        InputResult::Continue
    }

    fn line_len(&self) -> usize {
        self.lines[self.row].chars().count()
    }

    /// Convert a char index on the cursor row to a byte offset.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        let line = &self.lines[self.row];
        line.char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(line.len())
    }

    fn break_line(&mut self) {
        let byte_offset = self.char_to_byte(self.col);
        let rest = self.lines[self.row].split_off(byte_offset);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            let start = self.char_to_byte(self.col - 1);
            let end = self.char_to_byte(self.col);
            self.lines[self.row].replace_range(start..end, "");
            self.col -= 1;
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len();
            self.lines[self.row].push_str(&line);
        }
    }

    fn delete(&mut self) {
        if self.col < self.line_len() {
            let start = self.char_to_byte(self.col);
            let end = self.char_to_byte(self.col + 1);
            self.lines[self.row].replace_range(start..end, "");
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    /// unix-word-rubout within the cursor row.
    fn delete_word_back(&mut self) {
        if self.col == 0 {
            return;
        }
        let chars: Vec<char> = self.lines[self.row].chars().collect();
        let mut pos = self.col;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        let start = self.char_to_byte(pos);
        let end = self.char_to_byte(self.col);
        self.lines[self.row].replace_range(start..end, "");
        self.col = pos;
    }
}
