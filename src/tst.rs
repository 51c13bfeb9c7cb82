use rand::seq::SliceRandom;
use rand::thread_rng;

/// Ternary search tree node. Children are indices into the owning
/// tree's node arena rather than owning pointers.
#[derive(Debug)]
struct TstNode {
    ch: char,
    left: Option<usize>,
    middle: Option<usize>,
    right: Option<usize>,
    terminal: bool,
}

impl TstNode {
    fn new(ch: char) -> Self {
        Self {
            ch,
            left: None,
            middle: None,
            right: None,
            terminal: false,
        }
    }
}

/// Ternary search tree over the lexicon, supporting exact lookup and
/// prefix queries.
///
/// All nodes live in a single arena vector; slot 0 is the root of a
/// non-empty tree. Characters are treated as opaque data, no validation
/// is performed.
#[derive(Debug, Default)]
pub struct Tst {
    nodes: Vec<TstNode>,
}

impl Tst {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Discards the whole tree, then inserts every word in uniformly
    /// shuffled order.
    ///
    /// A ternary search tree degenerates toward a linked list when keys
    /// arrive sorted, which is exactly how lexicon files and set
    /// iteration hand them over. Shuffling once at build time keeps the
    /// expected depth low without any rebalancing. Query results do not
    /// depend on the insertion order, so the shuffle stays invisible to
    /// callers.
    pub fn build<'a, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut shuffled: Vec<&str> = words.into_iter().collect();
        shuffled.shuffle(&mut thread_rng());

        self.clear();
        for word in shuffled {
            self.insert(word);
        }
    }

    /// Inserts a single word. Inserting the empty string is a no-op and
    /// re-inserting an existing word leaves the tree unchanged.
    pub fn insert(&mut self, word: &str) {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return;
        }

        if self.nodes.is_empty() {
            self.nodes.push(TstNode::new(chars[0]));
        }

        let mut node = 0;
        let mut pos = 0;
        loop {
            let ch = chars[pos];
            if ch < self.nodes[node].ch {
                node = match self.nodes[node].left {
                    Some(n) => n,
                    None => {
                        let n = self.alloc(ch);
                        self.nodes[node].left = Some(n);
                        n
                    }
                };
            } else if ch > self.nodes[node].ch {
                node = match self.nodes[node].right {
                    Some(n) => n,
                    None => {
                        let n = self.alloc(ch);
                        self.nodes[node].right = Some(n);
                        n
                    }
                };
            } else {
                pos += 1;
                if pos == chars.len() {
                    self.nodes[node].terminal = true;
                    return;
                }
                node = match self.nodes[node].middle {
                    Some(n) => n,
                    None => {
                        let n = self.alloc(chars[pos]);
                        self.nodes[node].middle = Some(n);
                        n
                    }
                };
            }
        }
    }

    /// True iff `word` was inserted and its final character lands on a
    /// terminal node. The empty string is never found.
    pub fn find(&self, word: &str) -> bool {
        if self.nodes.is_empty() {
            return false;
        }

        let mut node = 0;
        let mut last_consumed = None;
        let mut chars = word.chars();
        let mut next = chars.next();
        while let Some(ch) = next {
            if ch < self.nodes[node].ch {
                node = match self.nodes[node].left {
                    Some(n) => n,
                    None => return false,
                };
            } else if ch > self.nodes[node].ch {
                node = match self.nodes[node].right {
                    Some(n) => n,
                    None => return false,
                };
            } else {
                last_consumed = Some(node);
                next = chars.next();
                if next.is_some() {
                    node = match self.nodes[node].middle {
                        Some(n) => n,
                        None => return false,
                    };
                }
            }
        }

        match last_consumed {
            Some(n) => self.nodes[n].terminal,
            None => false,
        }
    }

    /// True iff the descent consumes the whole input without hitting an
    /// absent branch, i.e. at least one entry starts with `word`, or
    /// `word` itself is an entry or extends one character-for-character.
    /// The empty string is vacuously a prefix.
    pub fn is_prefix(&self, word: &str) -> bool {
        if word.is_empty() {
            return true;
        }
        if self.nodes.is_empty() {
            return false;
        }

        let mut node = 0;
        let mut chars = word.chars();
        let mut next = chars.next();
        while let Some(ch) = next {
            if ch < self.nodes[node].ch {
                node = match self.nodes[node].left {
                    Some(n) => n,
                    None => return false,
                };
            } else if ch > self.nodes[node].ch {
                node = match self.nodes[node].right {
                    Some(n) => n,
                    None => return false,
                };
            } else {
                next = chars.next();
                if next.is_some() {
                    node = match self.nodes[node].middle {
                        Some(n) => n,
                        None => return false,
                    };
                }
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    fn alloc(&mut self, ch: char) -> usize {
        self.nodes.push(TstNode::new(ch));
        self.nodes.len() - 1
    }
}
