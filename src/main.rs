use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};

#[macro_use]
extern crate text_io;

use boggle_player::{BoardFile, BogglePlayer};

const MIN_WORD_LENGTH: usize = 3;

fn read_lexicon() -> HashSet<String> {
    let file = File::open("words.txt").unwrap();
    let reader = BufReader::new(file);
    let mut words = HashSet::new();
    for line in reader.lines() {
        let word = line.unwrap().to_lowercase();
        if word.chars().count() < 2 {
            continue;
        }
        words.insert(word);
    }
    words
}

fn main() {
    env_logger::init();

    let words = read_lexicon();
    println!("Number of Words: {}", words.len());

    let board = BoardFile::from_file("board.json");
    let mut player = BogglePlayer::new();
    player.build_lexicon(&words);
    player.set_board(board.rows, board.cols, Some(&board.faces));

    let mut found = BTreeSet::new();
    if player.get_all_valid_words(MIN_WORD_LENGTH, &mut found) {
        println!("Found {} words:", found.len());
        for word in found.iter() {
            println!("{}", word);
        }
    }

    loop {
        println!("Enter Word:");
        let query: String = read!("{}\n");
        if query.is_empty() {
            break;
        }

        println!("In Lexicon: {}", player.is_in_lexicon(&query));
        let path = player.is_on_board(&query);
        if path.is_empty() {
            println!("Not on board");
        } else {
            println!("On board at dice {:?}", path);
        }
    }
}
