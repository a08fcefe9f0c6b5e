use std::{cell::RefCell, rc::Rc};

use letter_gestures::{GestureMetrics, GestureTracker, Letter, TrackerOutput};
use serde::Serialize;

use crate::trace::{kind_label, ReplayLine};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventRow {
    pub ms: u64,
    pub kind: String,
    pub handled: bool,
    pub disallow_intercept: bool,
    pub redraw: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LetterRow {
    pub ms: u64,
    pub letter: char,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ReplayReport {
    pub events: Vec<EventRow>,
    pub letters: Vec<LetterRow>,
}

impl ReplayReport {
    pub fn recognized(&self) -> Vec<char> {
        self.letters.iter().map(|row| row.letter).collect()
    }

    pub fn print_csv(&self) {
        println!("event,ms,kind,handled,disallow_intercept,redraw");
        for row in &self.events {
            println!(
                "event,{},{},{},{},{}",
                row.ms,
                row.kind,
                u8::from(row.handled),
                u8::from(row.disallow_intercept),
                u8::from(row.redraw)
            );
        }
        for row in &self.letters {
            println!("letter,{},{}", row.ms, row.letter);
        }
    }
}

/// Feeds every line through a fresh tracker and records what it reported.
pub fn replay(lines: &[ReplayLine], metrics: GestureMetrics) -> ReplayReport {
    let detected: Rc<RefCell<Vec<Letter>>> = Rc::default();
    let sink = Rc::clone(&detected);
    let mut tracker = GestureTracker::new(metrics, move |letter| sink.borrow_mut().push(letter));

    let mut report = ReplayReport::default();
    for line in lines {
        let (kind, output): (String, TrackerOutput) = match line {
            ReplayLine::Pointer(event) => {
                (kind_label(event.kind).to_owned(), tracker.on_event(*event))
            }
            ReplayLine::Forward(event) => (
                format!("forward_{}", kind_label(event.kind)),
                tracker.forward_event(*event),
            ),
            ReplayLine::Enable { enabled, .. } => (
                (if *enabled { "enable" } else { "disable" }).to_owned(),
                tracker.set_enabled(*enabled),
            ),
        };
        report.events.push(EventRow {
            ms: line.t_ms(),
            kind,
            handled: output.handled,
            disallow_intercept: output.disallow_intercept,
            redraw: output.redraw,
        });

        for letter in detected.borrow_mut().drain(..) {
            log::info!("replay: {} at {}ms", letter, line.t_ms());
            report.letters.push(LetterRow {
                ms: line.t_ms(),
                letter: letter.as_char(),
            });
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{parse_expected_letters_str, parse_trace_str};

    fn replay_str(text: &str) -> ReplayReport {
        replay(&parse_trace_str(text).unwrap(), GestureMetrics::default())
    }

    #[test]
    fn session_trace_matches_its_expectation_file() {
        let report = replay_str(include_str!("../traces/session.csv"));
        let expected: Vec<char> =
            parse_expected_letters_str(include_str!("../traces/session.expect"))
                .unwrap()
                .into_iter()
                .map(Letter::as_char)
                .collect();
        assert_eq!(report.recognized(), expected);
    }

    #[test]
    fn each_letter_trace_matches_its_expectation_file() {
        let cases = [
            (
                include_str!("../traces/letter_l.csv"),
                include_str!("../traces/letter_l.expect"),
            ),
            (
                include_str!("../traces/letter_z.csv"),
                include_str!("../traces/letter_z.expect"),
            ),
            (
                include_str!("../traces/letter_o.csv"),
                include_str!("../traces/letter_o.expect"),
            ),
        ];
        for (trace, expect) in cases {
            let expected: Vec<char> = parse_expected_letters_str(expect)
                .unwrap()
                .into_iter()
                .map(Letter::as_char)
                .collect();
            assert_eq!(replay_str(trace).recognized(), expected);
        }
    }

    #[test]
    fn rows_carry_tracker_outputs() {
        let report = replay_str(
            "pointer,0,press,0,0\npointer,16,move,0,100\nforward,20,move,0,150\n\
             pointer,32,move,0,200\npointer,48,release,100,200\n",
        );
        assert_eq!(report.events.len(), 5);
        assert!(!report.events[0].handled);
        assert!(report.events[1].handled && report.events[1].disallow_intercept);
        assert_eq!(report.events[2].kind, "forward_move");
        assert_eq!(
            report.letters,
            vec![LetterRow {
                ms: 48,
                letter: 'L'
            }]
        );
    }

    #[test]
    fn disabled_stretch_recognizes_nothing() {
        let report = replay_str(
            "enable,0,0\npointer,1,press,0,0\npointer,2,move,0,100\n\
             pointer,3,move,0,200\npointer,4,release,100,200\n",
        );
        assert!(report.letters.is_empty());
        assert_eq!(report.events[0].kind, "disable");
        assert!(report.events.iter().all(|row| !row.handled));
    }

    #[test]
    fn json_report_lists_events_and_letters() {
        let report = replay_str(include_str!("../traces/letter_l.csv"));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["letters"][0]["letter"], "L");
        assert!(value["events"].as_array().is_some_and(|rows| !rows.is_empty()));
    }
}
