use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::board::Board;
use crate::tst::Tst;

/// The Boggle player: owns the current board graph and the lexicon tree
/// and exposes the four game operations over them.
///
/// All state is private; no caller can alias an individual die or tree
/// node. None of the operations may run concurrently with another on
/// the same player, the enumeration scribbles on shared visited flags.
#[derive(Debug, Default)]
pub struct BogglePlayer {
    board: Option<Board>,
    lexicon: Tst,
}

impl BogglePlayer {
    pub fn new() -> Self {
        Self {
            board: None,
            lexicon: Tst::new(),
        }
    }

    /// Rebuilds the lexicon from scratch. Words are expected to be
    /// lowercase letters only; this is the caller's contract and is not
    /// checked here.
    pub fn build_lexicon(&mut self, word_list: &HashSet<String>) {
        debug!("building lexicon from {} words", word_list.len());
        self.lexicon.build(word_list.iter().map(|w| w.as_str()));
    }

    /// Replaces the board with a fresh `rows` x `cols` grid built from
    /// the face array.
    ///
    /// Passing `None` leaves any existing board untouched; callers rely
    /// on this.
    pub fn set_board(&mut self, rows: usize, cols: usize, faces: Option<&[Vec<String>]>) {
        let faces = match faces {
            Some(faces) => faces,
            None => return,
        };

        debug!("rebuilding board: {} x {}", rows, cols);
        self.board = Some(Board::new(rows, cols, faces));
    }

    /// Collects every lexicon word of at least `min_length` characters
    /// spellable on the current board into `words`.
    ///
    /// Returns false, leaving `words` untouched, when no board has been
    /// set or the lexicon is empty. Every die is tried as a starting
    /// point; duplicates found from different starts collapse in the
    /// set.
    pub fn get_all_valid_words(&mut self, min_length: usize, words: &mut BTreeSet<String>) -> bool {
        let board = match self.board.as_mut() {
            Some(board) => board,
            None => return false,
        };
        if self.lexicon.is_empty() {
            return false;
        }

        for start in 0..board.len() {
            board.clear_visited();
            board.search_valid(start, min_length, &self.lexicon, words);
        }
        true
    }

    /// True iff the word is in the lexicon built by the most recent
    /// `build_lexicon` call.
    pub fn is_in_lexicon(&self, word: &str) -> bool {
        self.lexicon.find(word)
    }

    /// Looks for the word on the current board and returns one
    /// witnessing path of die indices, empty when the word cannot be
    /// traced (or no board is set).
    pub fn is_on_board(&self, word: &str) -> Vec<usize> {
        match self.board.as_ref() {
            Some(board) => board.find_word_path(word),
            None => Vec::new(),
        }
    }
}
