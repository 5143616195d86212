//! Symbol window (bounded history) for LZ77 match search and expansion.
//!
//! The window keeps the most recent `capacity` symbols of processed text in a
//! ring. Back-references read it cyclically: a run that walks past the newest
//! symbol continues from the oldest one, which is how copies with
//! `offset < length` repeat part of the window.
//!
//! Unlike byte-oriented LZ77 windows the capacity is tiny (5 symbols by
//! default) and arbitrary, so indices are reduced with `%` instead of a mask.

use crate::error::{OxiTextError, Result};

/// A ring of the most recent symbols.
#[derive(Debug, Clone)]
pub struct SymbolWindow {
    /// The underlying storage.
    buffer: Vec<char>,
    /// Next write position.
    position: usize,
    /// Number of symbols held (up to capacity).
    size: usize,
    /// Maximum number of symbols held.
    capacity: usize,
}

impl SymbolWindow {
    /// Create a new window holding at most `capacity` symbols.
    ///
    /// Returns [`OxiTextError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(OxiTextError::invalid_argument(
                "window size must be a positive integer",
            ));
        }

        Ok(Self {
            buffer: vec!['\0'; capacity],
            position: 0,
            size: 0,
            capacity,
        })
    }

    /// Get the capacity of the window.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of symbols currently in the window.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the window is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Clear the window.
    pub fn clear(&mut self) {
        self.position = 0;
        self.size = 0;
    }

    /// Append a symbol, evicting the oldest one when full.
    pub fn push(&mut self, symbol: char) {
        self.buffer[self.position] = symbol;
        self.position = (self.position + 1) % self.capacity;
        if self.size < self.capacity {
            self.size += 1;
        }
    }

    /// Append several symbols in order.
    pub fn extend<I: IntoIterator<Item = char>>(&mut self, symbols: I) {
        for symbol in symbols {
            self.push(symbol);
        }
    }

    /// Symbol at logical `index`, where 0 is the oldest symbol held.
    pub fn get(&self, index: usize) -> Option<char> {
        if index >= self.size {
            return None;
        }
        Some(self.buffer[self.physical(index)])
    }

    /// Symbol at `index` reading the window as an endless repetition of
    /// itself.
    ///
    /// # Panics
    ///
    /// Panics if the window is empty.
    #[inline]
    pub fn get_cyclic(&self, index: usize) -> char {
        assert!(self.size > 0, "cyclic read from an empty window");
        self.buffer[self.physical(index % self.size)]
    }

    /// Map a logical index (0 = oldest) to a slot in the buffer.
    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.position + self.capacity - self.size + index) % self.capacity
    }

    /// Count how many leading symbols of `input` equal the cyclic window
    /// starting at logical index `start`.
    pub fn cyclic_match_len(&self, start: usize, input: &[char]) -> usize {
        if self.is_empty() {
            return 0;
        }
        input
            .iter()
            .enumerate()
            .take_while(|&(k, &symbol)| self.get_cyclic(start + k) == symbol)
            .count()
    }

    /// Count how many leading symbols of `input` equal the window read from
    /// logical index `start` up to the newest symbol, without wrapping.
    pub fn linear_match_len(&self, start: usize, input: &[char]) -> usize {
        input
            .iter()
            .enumerate()
            .take_while(|&(k, &symbol)| self.get(start + k) == Some(symbol))
            .count()
    }

    /// Read `length` symbols starting `distance` symbols back from the newest
    /// end of the window, repeating the window when the run passes its end.
    ///
    /// Distance 1 is the newest symbol, distance `len()` the oldest. A run
    /// too long to allocate is an error, not an abort.
    pub fn read_run(&self, distance: usize, length: usize) -> Result<Vec<char>> {
        if distance == 0 || distance > self.size {
            return Err(OxiTextError::invalid_argument(format!(
                "distance {} outside window of {} symbols",
                distance, self.size
            )));
        }

        let mut run = Vec::new();
        run.try_reserve_exact(length).map_err(|_| {
            OxiTextError::invalid_argument(format!("run of {} symbols is too long", length))
        })?;

        let start = self.size - distance;
        run.extend((0..length).map(|k| self.get_cyclic(start + k)));
        Ok(run)
    }

    /// Copy the window contents, oldest first.
    pub fn to_vec(&self) -> Vec<char> {
        (0..self.size).filter_map(|i| self.get(i)).collect()
    }
}

/// A window combined with the full output it has seen.
///
/// Used by decoders: every emitted symbol goes to the output and into the
/// window, so back-references always resolve against the trailing symbols.
#[derive(Debug, Clone)]
pub struct WindowedOutput {
    window: SymbolWindow,
    output: Vec<char>,
}

impl WindowedOutput {
    /// Create a new windowed output with the given window capacity.
    pub fn new(window_size: usize) -> Result<Self> {
        Ok(Self {
            window: SymbolWindow::new(window_size)?,
            output: Vec::new(),
        })
    }

    /// Emit a literal symbol.
    pub fn write_literal(&mut self, symbol: char) {
        self.window.push(symbol);
        self.output.push(symbol);
    }

    /// Expand a back-reference against the window as it stands before the
    /// copy and emit the result.
    pub fn copy_run(&mut self, distance: usize, length: usize) -> Result<()> {
        let run = self.window.read_run(distance, length)?;
        self.output.try_reserve(run.len()).map_err(|_| {
            OxiTextError::invalid_argument(format!("run of {} symbols is too long", length))
        })?;
        self.window.extend(run.iter().copied());
        self.output.extend(run);
        Ok(())
    }

    /// Get the current window.
    pub fn window(&self) -> &SymbolWindow {
        &self.window
    }

    /// Number of symbols emitted so far.
    pub fn output_len(&self) -> usize {
        self.output.len()
    }

    /// Consume and return the output as a string.
    pub fn into_string(self) -> String {
        self.output.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_basic() {
        let mut window = SymbolWindow::new(5).unwrap();
        assert!(window.is_empty());

        window.extend("abc".chars());
        assert_eq!(window.len(), 3);
        assert_eq!(window.to_vec(), vec!['a', 'b', 'c']);
        assert_eq!(window.get(0), Some('a'));
        assert_eq!(window.get(3), None);
    }

    #[test]
    fn test_window_wrap() {
        let mut window = SymbolWindow::new(5).unwrap();
        window.extend("abacabacabad".chars());
        assert_eq!(window.len(), 5);
        assert_eq!(window.to_vec(), "cabad".chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = SymbolWindow::new(0).unwrap_err();
        assert!(matches!(err, OxiTextError::InvalidArgument { .. }));
    }

    #[test]
    fn test_cyclic_read() {
        let mut window = SymbolWindow::new(5).unwrap();
        window.extend("abac".chars());
        let run: String = (0..7).map(|k| window.get_cyclic(k)).collect();
        assert_eq!(run, "abacaba");
    }

    #[test]
    fn test_cyclic_match_len() {
        let mut window = SymbolWindow::new(5).unwrap();
        window.extend("abac".chars());
        let input: Vec<char> = "abacabad".chars().collect();
        assert_eq!(window.cyclic_match_len(0, &input), 7);
        assert_eq!(window.cyclic_match_len(1, &input), 0);
        assert_eq!(window.cyclic_match_len(2, &input), 1);
    }

    #[test]
    fn test_linear_match_len_stops_at_newest() {
        let mut window = SymbolWindow::new(5).unwrap();
        window.extend("abac".chars());
        let input: Vec<char> = "acab".chars().collect();
        assert_eq!(window.linear_match_len(2, &input), 2);
        assert_eq!(window.cyclic_match_len(2, &input), 4);
        assert_eq!(window.linear_match_len(4, &input), 0);
    }

    #[test]
    fn test_read_run_overlap() {
        let mut window = SymbolWindow::new(5).unwrap();
        window.extend("xab".chars());
        // Distance 2 starts at 'a'; the run continues from the oldest symbol.
        assert_eq!(window.read_run(2, 4).unwrap(), vec!['a', 'b', 'x', 'a']);
        assert_eq!(window.read_run(3, 2).unwrap(), vec!['x', 'a']);
    }

    #[test]
    fn test_read_run_invalid_distance() {
        let mut window = SymbolWindow::new(5).unwrap();
        window.extend("ab".chars());
        assert!(window.read_run(0, 1).is_err());
        assert!(window.read_run(3, 1).is_err());
    }

    #[test]
    fn test_read_run_unbounded_length() {
        let mut window = SymbolWindow::new(5).unwrap();
        window.extend("ab".chars());
        let err = window.read_run(1, usize::MAX).unwrap_err();
        assert!(matches!(err, OxiTextError::InvalidArgument { .. }));

        let mut out = WindowedOutput::new(5).unwrap();
        out.write_literal('a');
        assert!(out.copy_run(1, usize::MAX).is_err());
        assert_eq!(out.output_len(), 1);
    }

    #[test]
    fn test_windowed_output() {
        let mut out = WindowedOutput::new(5).unwrap();
        for c in "abac".chars() {
            out.write_literal(c);
        }
        out.copy_run(4, 7).unwrap();
        out.write_literal('d');
        assert_eq!(out.output_len(), 12);
        assert_eq!(out.window().to_vec(), "cabad".chars().collect::<Vec<_>>());
        assert_eq!(out.into_string(), "abacabacabad");
    }
}
