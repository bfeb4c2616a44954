use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Tokens every well-formed line must provide.
pub const LOG_FIELDS: usize = 13;

/// Layout of the bracketed `time_local` field.
const TIME_LOCAL_FORMAT: &str = "[%d/%b/%Y:%H:%M:%S %z]";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {LOG_FIELDS} fields, line ended after {got}")]
    Truncated { got: usize },

    #[error("bad time_local field {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("bad request_time field {value:?}")]
    RequestTime { value: String },
}

/// One fully parsed access-log line.
#[derive(Debug, Clone)]
pub struct AccessRecord {
    pub remote_addr: String,
    pub remote_user: String,
    pub real_ip: String,
    pub time_local: DateTime<FixedOffset>,
    pub request: String,
    pub status: String,
    pub body_bytes_sent: String,
    pub referer: String,
    pub user_agent: String,
    pub forwarded_for: String,
    pub request_id: String,
    pub rb_user: String,
    /// Upstream-reported latency in seconds.
    pub request_time: f64,
}

impl AccessRecord {
    /// The aggregation key: the path component of the request line.
    ///
    /// `"GET /path HTTP/1.1"` yields `/path`; a request with two or fewer
    /// tokens falls back to its first token. `None` when the request field
    /// holds no tokens at all.
    pub fn normalized_path(&self) -> Option<&str> {
        let fields: Vec<&str> = self.request.split_whitespace().collect();

        if fields.len() > 2 {
            Some(fields[1])
        } else {
            fields.first().copied()
        }
    }
}

/// Builds an [`AccessRecord`] from the tokens of one line, consumed in field
/// order. Never returns a partially filled record.
pub fn parse_record<I>(tokens: I) -> Result<AccessRecord, ParseError>
where
    I: IntoIterator<Item = String>,
{
    let mut fields = FieldReader {
        tokens: tokens.into_iter(),
        taken: 0,
    };

    let remote_addr = fields.next_field()?;
    let remote_user = fields.next_field()?;
    let real_ip = fields.next_field()?;
    let time_local = parse_time_local(&fields.next_field()?)?;
    let request = fields.next_field()?;
    let status = fields.next_field()?;
    let body_bytes_sent = fields.next_field()?;
    let referer = fields.next_field()?;
    let user_agent = fields.next_field()?;
    let forwarded_for = fields.next_field()?;
    let request_id = fields.next_field()?;
    let rb_user = fields.next_field()?;
    let request_time = parse_request_time(&fields.next_field()?)?;

    Ok(AccessRecord {
        remote_addr,
        remote_user,
        real_ip,
        time_local,
        request,
        status,
        body_bytes_sent,
        referer,
        user_agent,
        forwarded_for,
        request_id,
        rb_user,
        request_time,
    })
}

struct FieldReader<I> {
    tokens: I,
    taken: usize,
}

impl<I: Iterator<Item = String>> FieldReader<I> {
    fn next_field(&mut self) -> Result<String, ParseError> {
        match self.tokens.next() {
            Some(token) => {
                self.taken += 1;
                Ok(token)
            }
            None => Err(ParseError::Truncated { got: self.taken }),
        }
    }
}

fn parse_time_local(value: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_str(value, TIME_LOCAL_FORMAT).map_err(|e| ParseError::Timestamp {
        value: value.to_string(),
        source: e,
    })
}

/// Latency must be a finite, non-negative number of seconds.
fn parse_request_time(value: &str) -> Result<f64, ParseError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite() && *t >= 0.0)
        .ok_or_else(|| ParseError::RequestTime {
            value: value.to_string(),
        })
}
