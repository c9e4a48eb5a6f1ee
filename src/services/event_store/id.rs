use chrono::Utc;

/// Issues store-wide unique event ids.
///
/// Ids are decimal millisecond timestamps. Two creations inside the same
/// millisecond, or a clock that runs behind a previously issued id, get the
/// next integer instead, so ids strictly increase within a session.
///
/// Once `i64::MAX` has been issued, later ids take the form
/// `9223372036854775807-<n>` with `n` counting up.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_issued: i64,
    /// Last suffix issued after the numeric range ran out
    last_suffix: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start past every numeric id already present in the store
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let mut seeded = Self::default();
        for id in existing {
            if let Ok(numeric) = id.parse::<i64>() {
                seeded.last_issued = seeded.last_issued.max(numeric);
            } else if let Some(suffix) = exhausted_suffix(id) {
                seeded.last_issued = i64::MAX;
                seeded.last_suffix = seeded.last_suffix.max(Some(suffix));
            }
        }
        seeded
    }

    pub fn next_id(&mut self) -> String {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    pub(crate) fn next_id_at(&mut self, now_millis: i64) -> String {
        if let Some(next) = self.last_issued.checked_add(1) {
            let id = now_millis.max(next);
            self.last_issued = id;
            return id.to_string();
        }

        let suffix = match self.last_suffix {
            None => 0,
            Some(last) => last.saturating_add(1),
        };
        if suffix == 0 {
            log::warn!("Numeric event ids exhausted, issuing suffixed ids");
        }
        self.last_suffix = Some(suffix);
        format!("{}-{}", i64::MAX, suffix)
    }
}

fn exhausted_suffix(id: &str) -> Option<u64> {
    let (prefix, suffix) = id.split_once('-')?;
    if prefix.parse::<i64>().ok()? != i64::MAX {
        return None;
    }
    suffix.parse().ok()
}
