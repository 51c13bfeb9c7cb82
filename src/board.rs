use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, trace};
use serde::Deserialize;

use crate::tst::Tst;
use crate::util::{Direction, Position};

/// A single die on the board.
///
/// The face is stored lower-cased and may hold more than one letter
/// ("qu" dice). The index is the die's row-major position, assigned once
/// at construction. The visited flag is scratch state for the word
/// enumeration and is false outside of a running search. Neighbours are
/// arena indices into the owning board, the die itself owns nothing.
#[derive(Debug)]
pub struct Die {
    face: String,
    index: usize,
    visited: bool,
    neighbors: Vec<usize>,
}

impl Die {
    fn new(face: &str, index: usize) -> Self {
        Self {
            face: face.to_lowercase(),
            index,
            visited: false,
            neighbors: Vec::new(),
        }
    }

    /// The letters on the die face.
    pub fn face(&self) -> &str {
        &self.face
    }

    /// The die's row-major position on the board.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// On-disk board description, loaded from JSON.
#[derive(Debug, Deserialize)]
pub struct BoardFile {
    pub rows: usize,
    pub cols: usize,
    pub faces: Vec<Vec<String>>,
}

impl BoardFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let mut file = File::open(path.as_ref()).unwrap();
        let mut data = String::new();
        file.read_to_string(&mut data).unwrap();
        serde_json::from_str(&data).unwrap()
    }
}

/// The dice grid with its adjacency lists.
///
/// All dice live in a single row-major arena; adjacency links are arena
/// indices, so the board exclusively owns every die while neighbour
/// references stay non-owning.
#[derive(Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    dice: Vec<Die>,
}

impl Board {
    /// Builds the grid for the given face array. Dice are allocated in a
    /// first pass, then every pair of grid-adjacent dice is linked in a
    /// second pass (8 directions, clipped at the boundary).
    pub fn new(rows: usize, cols: usize, faces: &[Vec<String>]) -> Self {
        let mut dice = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                dice.push(Die::new(&faces[i][j], i * cols + j));
            }
        }

        let mut board = Self { rows, cols, dice };
        for i in 0..rows {
            for j in 0..cols {
                let pos = Position { row: i, col: j };
                for dir in Direction::iter() {
                    if let Some(n) = pos.step(*dir, rows, cols) {
                        let n = n.as_index(cols);
                        board.dice[pos.as_index(cols)].neighbors.push(n);
                    }
                }
            }
        }
        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of dice on the board.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// The face of the die at the given row-major index.
    pub fn face(&self, index: usize) -> &str {
        self.dice[index].face()
    }

    /// Clears every die's visited flag.
    pub(crate) fn clear_visited(&mut self) {
        for die in self.dice.iter_mut() {
            die.visited = false;
        }
    }

    #[cfg(test)]
    fn all_unvisited(&self) -> bool {
        self.dice.iter().all(|d| !d.visited)
    }

    /// Collects every lexicon word of at least `min_length` characters
    /// spellable from the given starting die.
    ///
    /// Iterative depth-first search over an explicit stack. Each die is
    /// pushed twice: once as an entry event and, right after it is
    /// marked visited, again as its own exit event. Popping a visited
    /// die therefore means the branch below it is exhausted, so its flag
    /// and its face's characters are unwound. Branches whose accumulated
    /// string is not a lexicon prefix are dropped without a push, which
    /// is what keeps the search tractable. The protocol leaves every
    /// visited flag clear once the stack drains.
    pub(crate) fn search_valid(
        &mut self,
        start: usize,
        min_length: usize,
        lexicon: &Tst,
        words: &mut BTreeSet<String>,
    ) {
        let mut stack = vec![start];
        let mut current = String::new();

        while let Some(at) = stack.pop() {
            if self.dice[at].visited {
                // Exit event: unwind this die from the running string.
                let die = &mut self.dice[at];
                die.visited = false;
                let keep = current.len() - die.face.len();
                current.truncate(keep);
                continue;
            }

            let face_len = self.dice[at].face.len();
            current.push_str(&self.dice[at].face);
            if !lexicon.is_prefix(&current) {
                trace!("pruned: {}", current);
                current.truncate(current.len() - face_len);
                continue;
            }

            self.dice[at].visited = true;
            if lexicon.find(&current) && current.len() >= min_length {
                debug!("found word: {}", current);
                words.insert(current.clone());
            }

            stack.push(at);
            for &n in self.dice[at].neighbors.iter() {
                if !self.dice[n].visited {
                    stack.push(n);
                }
            }
        }
    }

    /// Looks for one acyclic simple path spelling `word` and returns it
    /// as die indices, or an empty vector when no path exists.
    ///
    /// Matching is literal comparison against die faces, the lexicon
    /// plays no part here. The first path found wins; it is not
    /// necessarily the shortest one.
    pub fn find_word_path(&self, word: &str) -> Vec<usize> {
        let query = word.to_lowercase();

        for die in self.dice.iter() {
            if !query.starts_with(&die.face) {
                continue;
            }

            if die.face.len() == query.len() {
                return vec![die.index];
            }

            if die.face.len() < query.len() {
                let path = vec![die.index];
                if let Some(found) = self.extend_path(die.index, &query, die.face.len(), path) {
                    return found;
                }
            }
        }
        Vec::new()
    }

    /// Tries to extend a partial match from `at` across its neighbours.
    /// The path vector is cloned per candidate branch so each branch
    /// backtracks for free.
    fn extend_path(
        &self,
        at: usize,
        query: &str,
        offset: usize,
        path: Vec<usize>,
    ) -> Option<Vec<usize>> {
        for &n in self.dice[at].neighbors.iter() {
            let die = &self.dice[n];
            if path.contains(&n) || !query[offset..].starts_with(&die.face) {
                continue;
            }

            let mut extended = path.clone();
            extended.push(n);

            let end = offset + die.face.len();
            if end == query.len() {
                return Some(extended);
            }
            if let Some(found) = self.extend_path(n, query, end, extended) {
                return Some(found);
            }
        }
        None
    }
}

impl std::ops::Index<Position> for Board {
    type Output = Die;

    fn index(&self, index: Position) -> &Self::Output {
        &self.dice[index.as_index(self.cols)]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::Board;
    use crate::tst::Tst;
    use crate::util::Position;

    fn faces(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_neighbor_counts() {
        let board = Board::new(
            3,
            3,
            &faces(&[
                &["a", "b", "c"],
                &["d", "e", "f"],
                &["g", "h", "i"],
            ]),
        );

        // Corners touch 3 dice, edges 5, the centre all 8.
        assert_eq!(board.dice[0].neighbors.len(), 3);
        assert_eq!(board.dice[1].neighbors.len(), 5);
        assert_eq!(board.dice[4].neighbors.len(), 8);
        assert_eq!(board.dice[8].neighbors.len(), 3);
    }

    #[test]
    fn test_neighbor_order_is_clipped_compass_order() {
        let board = Board::new(
            3,
            3,
            &faces(&[
                &["a", "b", "c"],
                &["d", "e", "f"],
                &["g", "h", "i"],
            ]),
        );

        // Centre die: NW, N, NE, W, E, SW, S, SE.
        assert_eq!(board.dice[4].neighbors, vec![0, 1, 2, 3, 5, 6, 7, 8]);
        // Top-left corner only keeps E, S, SE.
        assert_eq!(board.dice[0].neighbors, vec![1, 3, 4]);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let board = Board::new(
            2,
            3,
            &faces(&[&["a", "b", "c"], &["d", "e", "f"]]),
        );
        for die in board.dice.iter() {
            for &n in die.neighbors.iter() {
                assert!(
                    board.dice[n].neighbors.contains(&die.index),
                    "asymmetric link {} -> {}",
                    die.index,
                    n
                );
            }
        }
    }

    #[test]
    fn test_faces_are_lowercased_and_indexed_row_major() {
        let board = Board::new(2, 2, &faces(&[&["A", "Qu"], &["c", "D"]]));
        assert_eq!(board.face(0), "a");
        assert_eq!(board.face(1), "qu");
        assert_eq!(board.face(3), "d");
        assert_eq!(board[Position { row: 1, col: 0 }].face(), "c");
        assert_eq!(board[Position { row: 0, col: 1 }].index(), 1);
    }

    #[test]
    fn test_search_valid_restores_visited_flags() {
        let mut board = Board::new(2, 2, &faces(&[&["a", "b"], &["c", "d"]]));
        let mut lexicon = Tst::new();
        for w in ["ab", "abc", "abcd", "ba", "dab"] {
            lexicon.insert(w);
        }

        let mut words = BTreeSet::new();
        for start in 0..board.len() {
            board.clear_visited();
            board.search_valid(start, 1, &lexicon, &mut words);
            assert!(board.all_unvisited(), "flags left dirty after start {}", start);
        }
        assert!(words.contains("abcd"));
    }

    #[test]
    fn test_search_valid_prunes_on_prefix() {
        let mut board = Board::new(1, 3, &faces(&[&["a", "b", "c"]]));
        let mut lexicon = Tst::new();
        lexicon.insert("ab");

        let mut words = BTreeSet::new();
        board.clear_visited();
        board.search_valid(0, 1, &lexicon, &mut words);
        let expected: BTreeSet<String> = ["ab".to_string()].into_iter().collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_find_word_path_simple() {
        let board = Board::new(1, 3, &faces(&[&["a", "b", "c"]]));
        assert_eq!(board.find_word_path("abc"), vec![0, 1, 2]);
        assert_eq!(board.find_word_path("cba"), vec![2, 1, 0]);
        assert_eq!(board.find_word_path("b"), vec![1]);
        // a and c are not adjacent on a 1x3 strip.
        assert!(board.find_word_path("ac").is_empty());
    }

    #[test]
    fn test_find_word_path_rejects_die_reuse() {
        let board = Board::new(1, 2, &faces(&[&["a", "b"]]));
        assert_eq!(board.find_word_path("ab"), vec![0, 1]);
        assert!(board.find_word_path("aba").is_empty());
    }

    #[test]
    fn test_find_word_path_multi_letter_faces() {
        let board = Board::new(1, 3, &faces(&[&["qu", "i", "t"]]));
        assert_eq!(board.find_word_path("quit"), vec![0, 1, 2]);
        assert_eq!(board.find_word_path("QUIT"), vec![0, 1, 2]);
        assert_eq!(board.find_word_path("qui"), vec![0, 1]);
        // The query must consume whole faces.
        assert!(board.find_word_path("q").is_empty());
        assert!(board.find_word_path("qit").is_empty());
    }
}
