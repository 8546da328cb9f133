//! CLI argument definitions for minigame.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use minigame_core::{AnimationIntensity, GameResult, GameType};

#[derive(Parser)]
#[command(name = "minigame")]
#[command(about = "Mini-game scoring and progress sync", version)]
pub struct Args {
    /// Scoring rules file (TOML or JSON); defaults are used when omitted
    #[arg(long, global = true, value_name = "FILE", env = "MINIGAME_RULES")]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a single game result and print the breakdown
    Score {
        #[command(flatten)]
        result: ResultArgs,
    },
    /// Score a game result and fold it into a progress file
    Play {
        /// Progress file (created if missing)
        #[arg(long, short, value_name = "FILE")]
        progress: PathBuf,
        #[command(flatten)]
        result: ResultArgs,
        /// Also unlock this level for the played game
        #[arg(long, value_name = "LEVEL")]
        unlock: Option<u32>,
    },
    /// Change player settings in a progress file
    Settings {
        /// Progress file
        #[arg(long, short, value_name = "FILE")]
        progress: PathBuf,
        /// Enable or disable sound
        #[arg(long)]
        sound: Option<bool>,
        /// Animation intensity (low, medium, high)
        #[arg(long)]
        animation: Option<AnimationIntensity>,
    },
    /// Merge a local and a remote progress file
    Reconcile {
        /// Local (client-side) progress file
        #[arg(long, value_name = "FILE")]
        local: PathBuf,
        /// Remote (server-side) progress file
        #[arg(long, value_name = "FILE")]
        remote: PathBuf,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Sync one identity between two progress directories
    Sync {
        /// User or guest identity
        #[arg(long)]
        identity: String,
        /// Local progress directory
        #[arg(long, value_name = "DIR")]
        local_dir: PathBuf,
        /// Remote progress directory
        #[arg(long, value_name = "DIR")]
        remote_dir: PathBuf,
    },
    /// Print the active scoring rules
    Rules {
        /// Output format
        #[arg(long, short, value_enum, default_value = "toml")]
        format: RulesFormat,
    },
    /// Print or write a fresh progress record
    Init {
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum RulesFormat {
    Toml,
    Json,
}

/// Raw session facts. Fields that do not apply to the game are ignored.
#[derive(clap::Args, Debug, Clone)]
pub struct ResultArgs {
    /// Game type (puzzle, quiz, matching)
    #[arg(long, short)]
    pub game: GameType,
    /// Difficulty tier attempted
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub level: i64,
    /// Elapsed time in seconds
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub time: f64,
    /// Hints used (puzzle)
    #[arg(long, allow_negative_numbers = true)]
    pub hints: Option<i64>,
    /// Correct answers or matches (quiz, matching)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub correct: i64,
    /// Wrong answers or matches (quiz, matching)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub mistakes: i64,
    /// Consecutive correct answers (quiz)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub streak: i64,
}

impl ResultArgs {
    pub fn to_result(&self) -> GameResult {
        match self.game {
            GameType::Puzzle => GameResult::Puzzle {
                level: self.level,
                time_seconds: self.time,
                hints_used: self.hints,
            },
            GameType::Quiz => GameResult::Quiz {
                level: self.level,
                correct: self.correct,
                mistakes: self.mistakes,
                streak: self.streak,
            },
            GameType::Matching => GameResult::Matching {
                level: self.level,
                time_seconds: self.time,
                correct: self.correct,
                mistakes: self.mistakes,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_puzzle() {
        let args = Args::try_parse_from([
            "minigame", "score", "--game", "puzzle", "--level", "2", "--time", "30", "--hints",
            "1",
        ])
        .unwrap();
        match args.command {
            Command::Score { result } => {
                assert_eq!(
                    result.to_result(),
                    GameResult::Puzzle {
                        level: 2,
                        time_seconds: 30.0,
                        hints_used: Some(1),
                    }
                );
            }
            _ => panic!("Expected Score command"),
        }
        assert!(args.rules.is_none());
    }

    #[test]
    fn test_parse_negative_values() {
        let args = Args::try_parse_from([
            "minigame", "score", "-g", "quiz", "--correct", "3", "--streak", "-2",
        ])
        .unwrap();
        match args.command {
            Command::Score { result } => {
                assert_eq!(result.game, GameType::Quiz);
                assert_eq!(result.streak, -2);
                assert_eq!(result.mistakes, 0);
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_parse_unknown_game() {
        assert!(Args::try_parse_from(["minigame", "score", "--game", "chess"]).is_err());
    }

    #[test]
    fn test_parse_global_rules_after_subcommand() {
        let args =
            Args::try_parse_from(["minigame", "rules", "--rules", "custom.toml", "-f", "json"])
                .unwrap();
        assert_eq!(args.rules, Some(PathBuf::from("custom.toml")));
        match args.command {
            Command::Rules { format } => assert_eq!(format, RulesFormat::Json),
            _ => panic!("Expected Rules command"),
        }
    }

    #[test]
    fn test_parse_play_with_unlock() {
        let args = Args::try_parse_from([
            "minigame", "play", "-p", "me.json", "-g", "matching", "--time", "12", "--correct",
            "6", "--unlock", "2",
        ])
        .unwrap();
        match args.command {
            Command::Play {
                progress,
                result,
                unlock,
            } => {
                assert_eq!(progress, PathBuf::from("me.json"));
                assert_eq!(result.to_result().game_type(), GameType::Matching);
                assert_eq!(unlock, Some(2));
            }
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_parse_settings() {
        let args = Args::try_parse_from([
            "minigame", "settings", "-p", "me.json", "--sound", "false", "--animation", "high",
        ])
        .unwrap();
        match args.command {
            Command::Settings {
                sound, animation, ..
            } => {
                assert_eq!(sound, Some(false));
                assert_eq!(animation, Some(AnimationIntensity::High));
            }
            _ => panic!("Expected Settings command"),
        }
    }

    #[test]
    fn test_parse_reconcile_requires_both_files() {
        assert!(Args::try_parse_from(["minigame", "reconcile", "--local", "a.json"]).is_err());

        let args = Args::try_parse_from([
            "minigame", "reconcile", "--local", "a.json", "--remote", "b.json", "-o", "c.json",
        ])
        .unwrap();
        match args.command {
            Command::Reconcile { output, .. } => {
                assert_eq!(output, Some(PathBuf::from("c.json")));
            }
            _ => panic!("Expected Reconcile command"),
        }
    }

    #[test]
    fn test_parse_sync() {
        let args = Args::try_parse_from([
            "minigame",
            "sync",
            "--identity",
            "visitor-7",
            "--local-dir",
            "device",
            "--remote-dir",
            "server",
        ])
        .unwrap();
        match args.command {
            Command::Sync {
                identity,
                local_dir,
                remote_dir,
            } => {
                assert_eq!(identity, "visitor-7");
                assert_eq!(local_dir, PathBuf::from("device"));
                assert_eq!(remote_dir, PathBuf::from("server"));
            }
            _ => panic!("Expected Sync command"),
        }
    }
}
