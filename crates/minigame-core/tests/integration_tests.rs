//! Integration tests for minigame-core
//!
//! These tests run the scoring, progress and sync modules together the way
//! a client/server pair would.

use chrono::{DateTime, TimeZone, Utc};
use minigame_core::config::{PuzzleRules, QuizRules};
use minigame_core::storage::{read_progress_file, write_progress_file};
use minigame_core::{
    GameProgressPayload, GameResult, GameType, JsonFileStore, MemoryStore, PerGameProgress,
    ProgressStore, ScoringRules, SyncOutcome, calculate_score, reconcile, sync_progress,
};
use tempfile::TempDir;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

/// Published example figures
mod scoring_scenarios {
    use super::*;

    #[test]
    fn test_puzzle_scenario() {
        let rules = ScoringRules {
            puzzle: PuzzleRules {
                base_points: 120.0,
                time_bonus_per_second: 2.0,
                level_multiplier: 1.2,
                hint_penalty: 15.0,
            },
            ..Default::default()
        };
        let result = GameResult::Puzzle {
            level: 2,
            time_seconds: 30.0,
            hints_used: Some(1),
        };

        let score = calculate_score(&result, &rules);
        assert_eq!(score.base, 120.0);
        assert_eq!(score.bonus, 60.0);
        assert_eq!(score.penalty, 15.0);
        assert!((score.multiplier - 2.4).abs() < 1e-9);
        assert_eq!(score.total, 396);
    }

    #[test]
    fn test_quiz_scenario() {
        let rules = ScoringRules {
            quiz: QuizRules {
                correct_points: 50.0,
                wrong_penalty: 12.0,
                streak_multiplier: 1.15,
            },
            ..Default::default()
        };
        let result = GameResult::Quiz {
            level: 1,
            correct: 5,
            mistakes: 1,
            streak: 3,
        };

        let score = calculate_score(&result, &rules);
        assert_eq!(score.base, 250.0);
        assert_eq!(score.penalty, 12.0);
        assert!((score.multiplier - 1.520875).abs() < 1e-9);
        assert_eq!(score.total, 362);
    }

    #[test]
    fn test_scores_from_json_results() {
        let rules = ScoringRules::default();
        let results: Vec<GameResult> = serde_json::from_str(
            r#"[
                {"gameType":"puzzle","level":2,"timeSeconds":30,"hintsUsed":1},
                {"gameType":"quiz","level":1,"correct":5,"mistakes":1,"streak":3},
                {"gameType":"matching","level":1,"timeSeconds":42.5,"correct":6,"mistakes":2}
            ]"#,
        )
        .unwrap();

        let totals: Vec<u64> = results
            .iter()
            .map(|r| calculate_score(r, &rules).total)
            .collect();
        assert_eq!(totals, vec![396, 362, 320]);
    }
}

mod reconciliation_scenarios {
    use super::*;

    #[test]
    fn test_stale_local_against_newer_remote() {
        let mut local = GameProgressPayload::new(at(1));
        local.total_score = 100;
        local.per_game.puzzle = PerGameProgress {
            level: 2,
            unlocked_levels: vec![1, 2],
            last_score: 50,
            updated_at: at(1),
        };

        let mut remote = GameProgressPayload::new(at(2));
        remote.total_score = 80;
        remote.per_game.puzzle = PerGameProgress {
            level: 1,
            unlocked_levels: vec![1],
            last_score: 30,
            updated_at: at(0),
        };

        let merged = reconcile(&local, &remote);
        assert_eq!(merged.total_score, 100);
        assert_eq!(merged.per_game.puzzle.level, 2);
        assert_eq!(merged.per_game.puzzle.unlocked_levels, vec![1, 2]);
        assert_eq!(merged.updated_at, at(2));
        assert_eq!(merged.per_game.puzzle.updated_at, at(1));
    }

    #[test]
    fn test_reconcile_from_json_strings() {
        let local: GameProgressPayload = serde_json::from_str(
            r#"{
                "totalScore": 640,
                "perGame": {
                    "puzzle": {"level": 3, "unlockedLevels": [1, 2, 3], "lastScore": 396, "updatedAt": "2024-05-01T10:00:00Z"},
                    "quiz": {"level": 1, "unlockedLevels": [1], "lastScore": 0, "updatedAt": "2024-05-01T09:00:00Z"},
                    "matching": {"level": 1, "unlockedLevels": [1], "lastScore": 0, "updatedAt": "2024-05-01T09:00:00Z"}
                },
                "lastPlayedGame": "puzzle",
                "lastActivityAt": "2024-05-01T10:00:00Z",
                "settings": {"sound": false},
                "updatedAt": "2024-05-01T10:00:00Z"
            }"#,
        )
        .unwrap();
        let remote: GameProgressPayload = serde_json::from_str(
            r#"{
                "totalScore": 500,
                "perGame": {
                    "puzzle": {"level": 1, "unlockedLevels": [1], "lastScore": 0, "updatedAt": "2024-04-01T09:00:00Z"},
                    "quiz": {"level": 2, "unlockedLevels": [1, 2], "lastScore": 362, "updatedAt": "2024-05-02T08:00:00Z"},
                    "matching": {"level": 1, "unlockedLevels": [1], "lastScore": 0, "updatedAt": "2024-04-01T09:00:00Z"}
                },
                "lastPlayedGame": "quiz",
                "lastActivityAt": "2024-05-02T08:00:00Z",
                "settings": {"sound": true, "animationIntensity": "low"},
                "updatedAt": "2024-05-02T08:00:00Z"
            }"#,
        )
        .unwrap();

        let merged = reconcile(&local, &remote);
        assert_eq!(merged.total_score, 640);
        assert_eq!(merged.last_played_game, Some(GameType::Quiz));
        assert_eq!(merged.game(GameType::Puzzle).level, 3);
        assert_eq!(merged.game(GameType::Quiz).unlocked_levels, vec![1, 2]);
        assert_eq!(merged.game(GameType::Quiz).last_score, 362);
        assert!(merged.settings.sound());

        let json = serde_json::to_value(&merged).unwrap();
        assert_eq!(json["updatedAt"], "2024-05-02T08:00:00Z");
        assert_eq!(json["perGame"]["puzzle"]["updatedAt"], "2024-05-01T10:00:00Z");
    }
}

/// Play on two devices, then sync through file-backed stores
mod workflow {
    use super::*;

    #[test]
    fn test_guest_session_then_login_sync() {
        let rules = ScoringRules::default();
        let temp = TempDir::new().unwrap();
        let mut device = JsonFileStore::new(temp.path().join("device"));
        let mut server = MemoryStore::new();

        // Server knows an older account state
        let mut account = GameProgressPayload::new(at(0));
        account.record_play(
            GameType::Matching,
            &calculate_score(
                &GameResult::Matching {
                    level: 1,
                    time_seconds: 20.0,
                    correct: 8,
                    mistakes: 0,
                },
                &rules,
            ),
            at(10),
        );
        server.save("visitor-7", &account).unwrap();

        // Guest plays a puzzle offline and unlocks level 2
        let mut guest = GameProgressPayload::new(at(0));
        let result = GameResult::Puzzle {
            level: 1,
            time_seconds: 45.0,
            hints_used: None,
        };
        let score = calculate_score(&result, &rules);
        guest.record_play(result.game_type(), &score, at(20));
        guest.unlock_level(GameType::Puzzle, 2, at(20));
        device.save("visitor-7", &guest).unwrap();

        let report = sync_progress("visitor-7", &mut device, &mut server, at(30)).unwrap();

        assert!(matches!(report.outcome, SyncOutcome::Merged { .. }));
        assert_eq!(report.progress.total_score, guest.total_score.max(account.total_score));
        assert_eq!(report.progress.game(GameType::Puzzle).unlocked_levels, vec![1, 2]);
        assert_eq!(report.progress.game(GameType::Matching).last_score, 420);
        assert_eq!(report.progress.last_played_game, Some(GameType::Puzzle));

        assert_eq!(device.load("visitor-7").unwrap(), Some(report.progress.clone()));
        assert_eq!(server.load("visitor-7").unwrap(), Some(report.progress));
    }

    #[test]
    fn test_progress_file_helpers() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("progress.json");
        let progress = GameProgressPayload::new(at(0));

        write_progress_file(&path, &progress).unwrap();
        assert_eq!(read_progress_file(&path).unwrap(), progress);
    }
}
