//! Human-readable match commentary
//!
//! A [`Narrator`] turns simulation events into text. A [`CommentarySink`]
//! decides where that text goes. Neither has any influence on the match.

use crate::umpire::Verdict;

/// Renders simulation events as text
pub trait Narrator {
    fn on_delivery(
        &self,
        batsman: &str,
        bowler: &str,
        verdict: Verdict,
        runs: Option<u32>,
    ) -> String;

    fn on_over_summary(&self, overs: u32, ball_in_over: u32, score: u32, wickets: u32) -> String;

    fn on_innings_start(&self, team: &str) -> String;

    fn on_innings_end(&self, score: u32, wickets: u32, overs: u32) -> String;

    fn on_match_preview(
        &self,
        captain1: &str,
        captain2: &str,
        team1: &str,
        team2: &str,
        total_overs: u32,
    ) -> String;

    fn on_final_result(&self, winning_team: &str, margin: u32) -> String;
}

/// Default English commentary
#[derive(Debug, Clone, Copy, Default)]
pub struct Commentator;

impl Narrator for Commentator {
    fn on_delivery(
        &self,
        batsman: &str,
        bowler: &str,
        verdict: Verdict,
        runs: Option<u32>,
    ) -> String {
        match (verdict, runs) {
            (Verdict::Out, _) => format!("{} bowls. {} strikes and is OUT!", bowler, batsman),
            (Verdict::NotOut, Some(1)) => {
                format!("{} bowls. {} strikes for 1 run.", bowler, batsman)
            }
            (Verdict::NotOut, Some(runs)) => {
                format!("{} bowls. {} strikes for {} runs.", bowler, batsman, runs)
            }
            (Verdict::NotOut, None) => format!("{} bowls. {} strikes.", bowler, batsman),
        }
    }

    fn on_over_summary(&self, overs: u32, ball_in_over: u32, score: u32, wickets: u32) -> String {
        format!("Overs: {}.{}, Score: {}/{}", overs, ball_in_over, score, wickets)
    }

    fn on_innings_start(&self, team: &str) -> String {
        format!("\n<Innings STARTED>\nTeam {} batting:", team)
    }

    fn on_innings_end(&self, score: u32, wickets: u32, overs: u32) -> String {
        format!("\nFinal Score: {}/{}, Overs: {}.\n", score, wickets, overs)
    }

    fn on_match_preview(
        &self,
        captain1: &str,
        captain2: &str,
        team1: &str,
        team2: &str,
        total_overs: u32,
    ) -> String {
        format!(
            "\n<Match Information>\n{} (Captain - {}) Vs {} (Captain - {})\nTotal Overs: {}",
            team1, captain1, team2, captain2, total_overs
        )
    }

    fn on_final_result(&self, winning_team: &str, margin: u32) -> String {
        format!("<Winner>\n{} Won by - {} Runs", winning_team, margin)
    }
}

/// Destination for rendered commentary lines
pub trait CommentarySink {
    fn emit(&mut self, line: String);
}

impl CommentarySink for Vec<String> {
    fn emit(&mut self, line: String) {
        self.push(line);
    }
}

/// Prints each line to stdout
#[derive(Debug, Default)]
pub struct StdoutSink;

impl CommentarySink for StdoutSink {
    fn emit(&mut self, line: String) {
        println!("{}", line);
    }
}

/// Discards everything
#[derive(Debug, Default)]
pub struct NullSink;

impl CommentarySink for NullSink {
    fn emit(&mut self, _line: String) {}
}

/// A narrator wired to a sink, handed to the match and innings controllers
pub struct Commentary<'a> {
    narrator: &'a dyn Narrator,
    sink: &'a mut dyn CommentarySink,
}

impl<'a> Commentary<'a> {
    pub fn new(narrator: &'a dyn Narrator, sink: &'a mut dyn CommentarySink) -> Self {
        Self { narrator, sink }
    }

    pub fn delivery(&mut self, batsman: &str, bowler: &str, verdict: Verdict, runs: Option<u32>) {
        let line = self.narrator.on_delivery(batsman, bowler, verdict, runs);
        self.sink.emit(line);
    }

    pub fn over_summary(&mut self, overs: u32, ball_in_over: u32, score: u32, wickets: u32) {
        let line = self.narrator.on_over_summary(overs, ball_in_over, score, wickets);
        self.sink.emit(line);
    }

    pub fn innings_start(&mut self, team: &str) {
        let line = self.narrator.on_innings_start(team);
        self.sink.emit(line);
    }

    pub fn innings_end(&mut self, score: u32, wickets: u32, overs: u32) {
        let line = self.narrator.on_innings_end(score, wickets, overs);
        self.sink.emit(line);
    }

    pub fn match_preview(
        &mut self,
        captain1: &str,
        captain2: &str,
        team1: &str,
        team2: &str,
        total_overs: u32,
    ) {
        let line = self
            .narrator
            .on_match_preview(captain1, captain2, team1, team2, total_overs);
        self.sink.emit(line);
    }

    pub fn final_result(&mut self, winning_team: &str, margin: u32) {
        let line = self.narrator.on_final_result(winning_team, margin);
        self.sink.emit(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_lines() {
        let c = Commentator;
        assert_eq!(
            c.on_delivery("Kohli", "Starc", Verdict::Out, None),
            "Starc bowls. Kohli strikes and is OUT!"
        );
        assert_eq!(
            c.on_delivery("Kohli", "Starc", Verdict::NotOut, Some(4)),
            "Starc bowls. Kohli strikes for 4 runs."
        );
        assert_eq!(
            c.on_delivery("Kohli", "Starc", Verdict::NotOut, Some(1)),
            "Starc bowls. Kohli strikes for 1 run."
        );
    }

    #[test]
    fn test_over_summary_format() {
        assert_eq!(Commentator.on_over_summary(2, 3, 41, 1), "Overs: 2.3, Score: 41/1");
    }

    #[test]
    fn test_commentary_routes_to_sink() {
        let mut lines: Vec<String> = Vec::new();
        {
            let mut commentary = Commentary::new(&Commentator, &mut lines);
            commentary.innings_start("India");
            commentary.final_result("India", 12);
        }
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Team India batting"));
        assert_eq!(lines[1], "<Winner>\nIndia Won by - 12 Runs");
    }

    #[test]
    fn test_null_sink_discards() {
        let mut sink = NullSink;
        let mut commentary = Commentary::new(&Commentator, &mut sink);
        commentary.innings_end(10, 2, 1);
    }
}
