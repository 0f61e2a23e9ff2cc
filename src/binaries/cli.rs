use chess_engine::config::SearchSettings;
use chess_engine::constants::{NUM_FILES, NUM_RANKS};
use chess_engine::game::Game;
use chess_engine::types::{GameResult, Side, Square};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Play chess against a fixed-depth minimax engine in the terminal.
#[derive(Parser, Debug)]
#[command(name = "chess-engine-cli", version)]
struct Args {
    /// Plies the computer searches per move
    #[arg(short, long)]
    depth: Option<u16>,

    /// Seed for choosing between equally good moves
    #[arg(long)]
    seed: Option<u64>,

    /// Side the computer plays (white or black)
    #[arg(short, long)]
    computer: Option<Side>,

    /// Show the board from Black's side
    #[arg(short, long)]
    flip: bool,
}

struct CLI {
    game: Game,
    display_enabled: bool,
    flip: bool,
}

impl CLI {
    fn new(settings: &SearchSettings, flip: bool) -> Self {
        Self {
            game: Game::new(settings),
            display_enabled: true,
            flip,
        }
    }

    fn show_help(&self) {
        println!("\n======================= INFORMATION ======================");
        println!("h or help - Displays help on the commands");
        println!("d or dd   - Displays board and toggles display setting");
        println!("moves     - Displays of list of possible moves");
        println!("f         - Flips the board");
        println!("q or quit - Quits the program");
        println!("================= CONTROLLING THE ENGINE =================");
        println!("new       - Starts a new game");
        println!("p or play - The computer plays the side to move");
        println!("switch    - Switches sides with the computer");
        println!("===================== CONFIGURATION ======================");
        println!("sd <depth> - Sets the search depth");
        println!("======================== MOVES ===========================");
        println!("e2e4, e2 e4, or e2 then e4 at the prompt");
    }

    fn display_board(&self) {
        if !self.display_enabled {
            return;
        }

        let position = self.game.position();
        let selected = self.game.selected();

        let ranks: Vec<i8> = match self.flip {
            false => (0..NUM_RANKS as i8).collect(),
            true => (0..NUM_RANKS as i8).rev().collect(),
        };
        let files: Vec<i8> = match self.flip {
            false => (0..NUM_FILES as i8).collect(),
            true => (0..NUM_FILES as i8).rev().collect(),
        };

        println!();
        for &rank in &ranks {
            print!(" {} ", NUM_RANKS as i8 - rank);
            for &file in &files {
                let square = Square::new(file, rank);
                let symbol = position.piece_at(square).symbol();

                match selected == Some(square) {
                    true => print!("[{}]", symbol),
                    false => print!(" {} ", symbol),
                }
            }
            println!();
        }

        print!("   ");
        for &file in &files {
            print!(" {} ", (b'a' + file as u8) as char);
        }
        println!();
    }

    fn print_result(&mut self, result: GameResult) -> bool {
        match result {
            GameResult::InProgress => return false,
            GameResult::Checkmate(winner) => {
                self.display_board();
                println!("\nGAME OVER");

                if winner == Side::White {
                    println!("{{White mates}}");
                } else {
                    println!("{{Black mates}}");
                }
            }
            GameResult::Stalemate => {
                self.display_board();
                println!("\nGAME OVER");
                println!("{{Stalemate}}");
            }
        }

        println!("\nType \"new\" to play again");
        true
    }

    fn display_legal_moves(&self) {
        let mut moves: Vec<String> = self
            .game
            .position()
            .legal_moves()
            .into_iter()
            .map(|(from, to)| format!("{}{}", from, to))
            .collect();

        moves.sort();

        for (index, move_str) in moves.iter().enumerate() {
            print!("{} ", move_str);
            if (index + 1) % 8 == 0 {
                println!();
            }
        }
        println!();
    }

    fn read_line(prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => None, // EOF
            Ok(_) => Some(input.trim().to_lowercase()),
        }
    }

    fn make_computer_move(&mut self) {
        println!("\nComputer is thinking...");

        match self.game.engine_move() {
            Ok(chosen) => {
                println!(
                    "\nComputer plays: \x1b[32m{} -> {}\x1b[0m  (score {}, {} nodes)",
                    chosen.start,
                    chosen.end,
                    chosen.score,
                    self.game.last_search_nodes()
                );
                self.display_board();
            }
            Err(e) => println!("\n{}", e),
        }
    }

    fn run_main_loop(&mut self) {
        self.display_board();

        loop {
            let status = self.game.status();
            let turn = self.game.position().turn();

            if status == GameResult::InProgress && turn == self.game.computer_side() {
                self.make_computer_move();
                self.print_result(self.game.status());
                continue;
            }

            println!("\n-------------------------------");
            println!("*   To move: {:?}   *", turn);
            println!("-------------------------------");

            let Some(command) = Self::read_line("\nFrom square OR command > ") else {
                return;
            };

            // COMMANDS WITHOUT PARAMETERS
            match command.as_str() {
                "d" => {
                    let enabled = self.display_enabled;
                    self.display_enabled = true;
                    self.display_board();
                    self.display_enabled = enabled;
                    continue;
                }
                "dd" => {
                    self.display_enabled = !self.display_enabled;

                    if self.display_enabled {
                        println!("\nBoard display enabled");
                        self.display_board();
                    } else {
                        println!("\nBoard display disabled");
                    }
                    continue;
                }
                "f" => {
                    self.flip = !self.flip;
                    self.display_board();
                    continue;
                }
                "h" | "help" => {
                    self.show_help();
                    continue;
                }
                "moves" => {
                    println!("\nLegal moves:");
                    self.display_legal_moves();
                    continue;
                }
                "new" => {
                    self.game.reset();
                    self.display_board();
                    continue;
                }
                "p" | "play" => {
                    if self.game.computer_side() != turn {
                        self.game.switch_sides();
                    }
                    continue;
                }
                "q" | "quit" => {
                    println!("\nProgram exiting");
                    break;
                }
                "switch" => {
                    self.game.switch_sides();
                    println!("\nComputer now plays {:?}", self.game.computer_side());
                    continue;
                }
                _ => {}
            }

            // COMMANDS WITH PARAMETERS
            if let Some(depth) = command.strip_prefix("sd ") {
                match depth.trim().parse::<u16>() {
                    Ok(depth) => {
                        self.game.set_depth(depth);
                        println!("\nSearch depth set to {}", depth);
                    }
                    Err(_) => println!("\nINVALID DEPTH!"),
                }
                continue;
            }

            if status != GameResult::InProgress {
                println!("\nThe game is over. Type \"new\" to play again");
                continue;
            }

            // PARSE "FROM" AND THEN "TO" SQUARE
            let cleaned_command = command.replace(' ', "");

            let (from, to) = match cleaned_command.chars().count() {
                // Need to prompt for "to" square
                2 => {
                    let Ok(from) = cleaned_command.parse::<Square>() else {
                        println!("\nINVALID FROM SQUARE!");
                        continue;
                    };

                    if !self.game.select(from) {
                        println!("\nNO PIECE OF YOURS ON {}!", from);
                        continue;
                    }
                    self.display_board();

                    let Some(to_input) = Self::read_line("             To square > ") else {
                        return;
                    };
                    let Ok(to) = to_input.parse::<Square>() else {
                        println!("\nINVALID SQUARE!");
                        continue;
                    };
                    (from, to)
                }
                // "to" square is included in command
                4 => match parse_move(&cleaned_command) {
                    Some(squares) => squares,
                    None => {
                        println!("\nINVALID SQUARE!");
                        continue;
                    }
                },
                _ => {
                    println!("\nINVALID COMMAND!");
                    continue;
                }
            };

            match self.game.play(from, to) {
                Ok(result) => {
                    if !self.print_result(result) {
                        self.display_board();
                    }
                }
                Err(e) => println!("\n{}", e.to_string().to_uppercase()),
            }
        }
    }
}

/// Splits a four-character move such as "e2e4" into its two squares.
fn parse_move(command: &str) -> Option<(Square, Square)> {
    let split = command.char_indices().nth(2).map(|(index, _)| index)?;
    let (from, to) = command.split_at(split);

    Some((from.parse().ok()?, to.parse().ok()?))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "chess_engine=warn".into()),
        )
        .init();

    let args = Args::parse();

    let mut settings = SearchSettings::from_env();
    if let Some(depth) = args.depth {
        settings.depth = depth;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(side) = args.computer {
        settings.computer_side = side;
    }

    println!("\n==============================");
    println!("|   Mailbox Chess Engine     |");
    println!("==============================\n");
    println!(
        "Computer plays {:?} at depth {}",
        settings.computer_side, settings.depth
    );
    println!("\n\"h or help\" displays a list of commands\n");

    let mut cli = CLI::new(&settings, args.flip);
    cli.run_main_loop();
}
