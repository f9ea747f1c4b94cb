use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use poker_eval::{Category, Judge, JudgeError, JudgeSettings, RoundError, Showdown, Tally, judge};

fn open_rounds() -> impl BufRead {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/rounds.txt");
    BufReader::new(File::open(path).unwrap())
}

#[test]
fn judges_every_round_in_a_file() {
    let mut lines = Vec::new();
    let tally = judge(open_rounds(), JudgeSettings::default(), |report| {
        lines.push(report.line)
    })
    .unwrap();
    assert_eq!(lines, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        tally,
        Tally {
            rounds: 5,
            player1_wins: 3,
            player2_wins: 2,
            ambiguous: 0,
        }
    );
}

#[test]
fn reports_follow_the_file() {
    let reports: Vec<_> = Judge::new(open_rounds(), JudgeSettings { strict: true })
        .collect::<Result<_, _>>()
        .unwrap();
    let outcomes: Vec<Showdown> = reports.iter().map(|report| report.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            Showdown::Loss,
            Showdown::Win,
            Showdown::Loss,
            Showdown::Win,
            Showdown::Win
        ]
    );

    let categories: Vec<(Category, Category)> = reports
        .iter()
        .map(|report| (report.player1.category(), report.player2.category()))
        .collect();
    assert_eq!(
        categories,
        vec![
            (Category::OnePair, Category::OnePair),
            (Category::HighCard, Category::HighCard),
            (Category::ThreeOfAKind, Category::Flush),
            (Category::OnePair, Category::OnePair),
            (Category::FullHouse, Category::FullHouse),
        ]
    );
    assert_eq!(
        reports[2].to_string(),
        "Line 3: P1[2D 9C AS AH AC](THREE_OF_A_KIND) P2[3D 6D 7D TD QD](FLUSH), Player 1 loses"
    );
}

#[test]
fn reports_serialize_to_json() {
    let mut judge = Judge::new(open_rounds(), JudgeSettings::default());
    let report = judge.next().unwrap().unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["line"], 1);
    assert_eq!(json["outcome"], "loss");
    assert_eq!(json["player1"]["category"], "ONE_PAIR");
    assert_eq!(judge.tally().rounds, 1);
}

#[test]
fn stops_at_the_first_bad_card() {
    let rounds = "5H 5C 6S 7S KD 2C 3S 8S 8D TD\n5H 5C 6S 7S KD 2C 3S 8S 8D ZD\n";
    let mut judge = Judge::new(rounds.as_bytes(), JudgeSettings::default());
    assert!(judge.next().unwrap().is_ok());
    let err = judge.next().unwrap().unwrap_err();
    assert!(matches!(
        err,
        JudgeError::Malformed {
            line: 2,
            source: RoundError::Hand(_)
        }
    ));
    assert_eq!(judge.tally().rounds, 1);
}
