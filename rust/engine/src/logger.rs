use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::{HandResult, RoundSummary};

/// One settled round as written to the JSONL history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Shoe seed of the session, enough to replay the card order
    pub seed: Option<u64>,
    /// Wager taken before the deal
    pub bet: u32,
    /// Every player hand, in table order, after settlement
    pub hands: Vec<HandResult>,
    pub dealer: Vec<Card>,
    pub dealer_total: u32,
    /// Money won (positive) or lost (negative) over the round
    pub net: i64,
    /// Balance after settlement
    pub money: i64,
    /// Timestamp when the round was settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_summary(round_id: String, seed: Option<u64>, summary: &RoundSummary) -> Self {
        Self {
            round_id,
            seed,
            bet: summary.bet,
            hands: summary.hands.clone(),
            dealer: summary.dealer_cards.clone(),
            dealer_total: summary.dealer_total,
            net: summary.net,
            money: summary.money,
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a file, one JSON object per line.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }

    /// Builds a record for `summary` with the next id and writes it.
    pub fn log_round(&mut self, seed: Option<u64>, summary: &RoundSummary) -> std::io::Result<()> {
        let id = self.next_id();
        let record = RoundRecord::from_summary(id, seed, summary);
        self.write(&record)
    }
}
