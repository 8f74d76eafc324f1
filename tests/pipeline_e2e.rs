// tests/pipeline_e2e.rs
use std::fs;
use std::path::{Path, PathBuf};

use duo_stats::compare::Category;
use duo_stats::config::options::{AppOptions, ExportFormat, PlayerSpec, Seasons};
use duo_stats::progress::RecordingProgress;
use duo_stats::runner::run;
use duo_stats::Error;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("duo_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn write(dir: &Path, season: u32, file: &str, text: &str) {
    let d = dir.join(season.to_string());
    fs::create_dir_all(&d).unwrap();
    fs::write(d.join(file), text).unwrap();
}

const SCHEDULE_2016: &str = "\
DATE,OPPONENT,RESULT,W-L
\"Tue, Oct 27\",vs NO,W111-95,1-0
\"Fri, Oct 30\",@ HOU,W112-92,2-0
\"Sat, Oct 31\",@ NO,W134-120,3-0
\"Wed, Nov 4\",vs MEM,L100-95,3-1
\"Fri, Apr 1\",vs BOS,7:30 PM,
";

const CURRY_2016: &str = "\
Date,OPP,Result,MIN,PTS
Tue 10/27,vs NO,W111-95,36,40
Fri 10/30,@HOU,W112-92,36,25
Wed 11/4,vs MEM,L100-95,30,28
Thu 11/5,@LAC,W90-80,31,10
";

const GREEN_2016: &str = "\
Date,OPP,Result,MIN,PTS
Tue 10/27,vs NO,W111-95,33,10
Sat 10/31,@NO,W134-120,35,12
Totals,,,,
";

fn options(input: &Path, out: &Path) -> AppOptions {
    let mut o = AppOptions::default();
    o.request.team = "gsw".into();
    o.request.seasons = Seasons::single(2016);
    o.request.players = [PlayerSpec::new("3975", "Curry"), PlayerSpec::new("6589", "Green")];
    o.input.dir = input.to_path_buf();
    o.export.out_dir = out.to_path_buf();
    o
}

fn season_2016(input: &Path) {
    write(input, 2016, "gsw.csv", SCHEDULE_2016);
    write(input, 2016, "3975.csv", CURRY_2016);
    write(input, 2016, "6589.csv", GREEN_2016);
}

#[test]
fn one_season_end_to_end() {
    let dir = tmp_dir("one_season");
    let (input, out) = (dir.join("data"), dir.join("out"));
    season_2016(&input);

    let summary = run(&options(&input, &out), None).unwrap();

    assert_eq!(summary.dataset.len(), 4);
    let order: Vec<(Category, f64)> = summary.results.iter().map(|r| (r.category, r.ratio)).collect();
    assert_eq!(order, vec![
        (Category::Player2Only, 100.0),
        (Category::Both, 100.0),
        (Category::Player1Only, 50.0),
        (Category::Neither, 0.0),
    ]);

    let names: Vec<String> = summary
        .files_written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![
        "curry-green-gsw-2016.csv",
        "curry-green-gsw-2016_summary.csv",
        "curry-green-gsw-2016_1_player2_only.csv",
        "curry-green-gsw-2016_2_both.csv",
        "curry-green-gsw-2016_3_player1_only.csv",
        "curry-green-gsw-2016_4_neither.csv",
    ]);

    let dataset = fs::read_to_string(out.join("curry-green-gsw-2016.csv")).unwrap();
    let mut lines = dataset.lines();
    assert_eq!(lines.next(), Some("x,y,date,category,color,ecolor"));
    assert_eq!(lines.next(), Some("95,111,\"Tue, Oct 27\",both,#ABA2E9,#ABA2E9"));
    assert_eq!(lines.last(), Some("100,95,\"Wed, Nov 4\",player1_only,#EF798A,#EF798A"));

    let summary_csv = fs::read_to_string(out.join("curry-green-gsw-2016_summary.csv")).unwrap();
    assert!(summary_csv.contains("3,player1_only,50.00,1,2,#EF798A,with Curry and no Green\n"));

    let frame = fs::read_to_string(out.join("curry-green-gsw-2016_4_neither.csv")).unwrap();
    assert_eq!(frame.lines().count(), 5);
    assert!(frame.lines().skip(1).all(|l| l.starts_with("muted,") && l.ends_with("#E0E0E0,#E0E0E0")));
}

#[test]
fn seasons_are_merged_in_order() {
    let dir = tmp_dir("two_seasons");
    let (input, out) = (dir.join("data"), dir.join("out"));
    season_2016(&input);
    write(&input, 2017, "gsw.csv", "DATE,RESULT\n\"Tue, Oct 25\",L129-100\n");
    write(&input, 2017, "3975.csv", "Date,Result,PTS\n");
    write(&input, 2017, "6589.csv", "Date,Result,PTS\n");

    let mut opts = options(&input, &out);
    opts.request.seasons = Seasons::parse("2016-2017").unwrap();
    opts.export.format = ExportFormat::Tsv;
    opts.input.format = ExportFormat::Csv;

    let mut progress = RecordingProgress::default();
    let summary = run(&opts, Some(&mut progress)).unwrap();

    assert_eq!(summary.dataset.len(), 5);
    let last = summary.dataset.last().unwrap();
    assert_eq!(last.game.date, "Tue, Oct 25");
    assert_eq!(last.category, Category::Neither);

    assert_eq!(progress.total, Some(2));
    assert_eq!(progress.done, vec![2016, 2017]);
    assert!(progress.finished);
    assert!(out.join("curry-green-gsw-2016-2017_summary.tsv").exists());
}

#[test]
fn missing_player_file_is_an_io_error_and_progress_finishes() {
    let dir = tmp_dir("missing_file");
    let (input, out) = (dir.join("data"), dir.join("out"));
    write(&input, 2016, "gsw.csv", SCHEDULE_2016);
    write(&input, 2016, "3975.csv", CURRY_2016);

    let mut progress = RecordingProgress::default();
    let err = run(&options(&input, &out), Some(&mut progress)).unwrap_err();
    match err {
        Error::Io { path, .. } => assert!(path.ends_with("2016/6589.csv")),
        other => panic!("unexpected {other:?}"),
    }
    assert!(progress.finished);
    assert!(!out.exists());
}

#[test]
fn bad_config_fails_before_reading() {
    let dir = tmp_dir("bad_config");
    let mut opts = options(&dir.join("nowhere"), &dir.join("out"));
    opts.compare.palette.both = "not-a-color".into();
    assert!(matches!(run(&opts, None), Err(Error::Config(_))));
}

#[test]
fn malformed_player_date_names_season_and_row() {
    let dir = tmp_dir("bad_date");
    let (input, out) = (dir.join("data"), dir.join("out"));
    write(&input, 2016, "gsw.csv", SCHEDULE_2016);
    write(&input, 2016, "3975.csv", "Date,Result,PTS\nTue 10/27,W111-95,40\nsoon,W112-92,25\n");
    write(&input, 2016, "6589.csv", GREEN_2016);

    let err = run(&options(&input, &out), None).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("season 2016"), "{msg}");
    assert!(msg.contains("player row 2"), "{msg}");
}
