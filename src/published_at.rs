//! pt-BR timestamp labels for a post header.
//!
//! The absolute form follows the pattern `d 'de' LLLL 'às' HH:mm'h'` and the
//! relative form uses the same buckets as date-fns `formatDistance` with a
//! suffix, so `"há cerca de 3 horas"` or `"em 2 dias"`.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};

const MONTHS_PT_BR: [&'static str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

pub fn format_absolute<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!(
        "{} de {} às {:02}:{:02}h",
        at.day(),
        MONTHS_PT_BR[at.month0() as usize],
        at.hour(),
        at.minute()
    )
}

enum Distance {
    LessThanXMinutes(i64),
    XMinutes(i64),
    AboutXHours(i64),
    XDays(i64),
    AboutXMonths(i64),
    XMonths(i64),
    AboutXYears(i64),
    OverXYears(i64),
    AlmostXYears(i64),
}

impl Distance {
    fn to_pt_br(&self) -> String {
        fn plural(count: i64, one: &str, other: &str) -> String {
            if count == 1 {
                one.to_owned()
            } else {
                other.replace("{}", &count.to_string())
            }
        }

        match *self {
            Distance::LessThanXMinutes(n) => plural(n, "menos de um minuto", "menos de {} minutos"),
            Distance::XMinutes(n) => plural(n, "1 minuto", "{} minutos"),
            Distance::AboutXHours(n) => plural(n, "cerca de 1 hora", "cerca de {} horas"),
            Distance::XDays(n) => plural(n, "1 dia", "{} dias"),
            Distance::AboutXMonths(n) => plural(n, "cerca de 1 mês", "cerca de {} meses"),
            Distance::XMonths(n) => plural(n, "1 mês", "{} meses"),
            Distance::AboutXYears(n) => plural(n, "cerca de 1 ano", "cerca de {} anos"),
            Distance::OverXYears(n) => plural(n, "mais de 1 ano", "mais de {} anos"),
            Distance::AlmostXYears(n) => plural(n, "quase 1 ano", "quase {} anos"),
        }
    }
}

fn full_months_between(earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> i64 {
    let mut months = (later.year() as i64 - earlier.year() as i64) * 12 + later.month() as i64
        - earlier.month() as i64;

    if (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }

    months
}

fn distance(earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> Distance {
    let seconds = (*later - *earlier).num_seconds();
    // Math.round on a non-negative value
    let minutes = (seconds + 30) / 60;

    if minutes < 2 {
        if minutes == 0 {
            Distance::LessThanXMinutes(1)
        } else {
            Distance::XMinutes(minutes)
        }
    } else if minutes < 45 {
        Distance::XMinutes(minutes)
    } else if minutes < 90 {
        Distance::AboutXHours(1)
    } else if minutes < MINUTES_IN_DAY {
        Distance::AboutXHours((minutes + 30) / 60)
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        Distance::XDays(1)
    } else if minutes < MINUTES_IN_MONTH {
        Distance::XDays((minutes + MINUTES_IN_DAY / 2) / MINUTES_IN_DAY)
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        Distance::AboutXMonths((minutes + MINUTES_IN_MONTH / 2) / MINUTES_IN_MONTH)
    } else {
        let months = full_months_between(earlier, later);

        if months < 12 {
            Distance::XMonths((minutes + MINUTES_IN_MONTH / 2) / MINUTES_IN_MONTH)
        } else {
            let years = months / 12;
            match months % 12 {
                0..=2 => Distance::AboutXYears(years),
                3..=8 => Distance::OverXYears(years),
                _ => Distance::AlmostXYears(years + 1),
            }
        }
    }
}

/// Distance from `now` to `at` in pt-BR, prefixed with `há` for the past and
/// `em` for the future.
pub fn format_relative(at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if at > now {
        format!("em {}", distance(now, at).to_pt_br())
    } else {
        format!("há {}", distance(at, now).to_pt_br())
    }
}

/// Both labels of a `<time>` element, together with the instant they were
/// computed at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishedLabel {
    pub published_at: DateTime<Utc>,
    pub absolute: String,
    pub relative: String,
    pub computed_at: DateTime<Utc>,
}

impl PublishedLabel {
    pub fn compute<Tz: TimeZone>(published_at: DateTime<Utc>, viewer_tz: &Tz, now: DateTime<Utc>) -> Self {
        PublishedLabel {
            published_at,
            absolute: format_absolute(&published_at.with_timezone(viewer_tz)),
            relative: format_relative(&published_at, &now),
            computed_at: now,
        }
    }

    /// Value for the `datetime` attribute.
    pub fn iso(&self) -> String {
        self.published_at.to_rfc3339()
    }

    /// Recomputes the relative label; returns whether the text changed.
    pub fn refresh(&mut self, now: DateTime<Utc>) -> bool {
        let relative = format_relative(&self.published_at, &now);
        self.computed_at = now;

        if relative != self.relative {
            self.relative = relative;
            true
        } else {
            false
        }
    }

    pub fn is_stale(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        now - self.computed_at >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn absolute_form() {
        assert_eq!(format_absolute(&at(2022, 5, 3, 20, 0, 0)), "3 de maio às 20:00h");
        assert_eq!(format_absolute(&at(2023, 3, 15, 8, 5, 0)), "15 de março às 08:05h");
    }

    #[test]
    fn absolute_form_uses_viewer_offset() {
        let sao_paulo = FixedOffset::west_opt(3 * 3600).unwrap();
        let label = PublishedLabel::compute(at(2022, 5, 4, 1, 30, 0), &sao_paulo, at(2022, 5, 4, 2, 0, 0));

        assert_eq!(label.absolute, "3 de maio às 22:30h");
        assert_eq!(label.iso(), "2022-05-04T01:30:00+00:00");
    }

    #[test]
    fn relative_buckets() {
        let now = at(2022, 5, 3, 20, 0, 0);
        let cases = [
            (now, "há menos de um minuto"),
            (now - Duration::seconds(29), "há menos de um minuto"),
            (now - Duration::seconds(90), "há 2 minutos"),
            (now - Duration::seconds(60), "há 1 minuto"),
            (now - Duration::minutes(30), "há 30 minutos"),
            (now - Duration::minutes(60), "há cerca de 1 hora"),
            (now - Duration::hours(3), "há cerca de 3 horas"),
            (now - Duration::hours(30), "há 1 dia"),
            (now - Duration::days(5), "há 5 dias"),
            (now - Duration::days(45), "há cerca de 2 meses"),
            (now - Duration::days(31), "há cerca de 1 mês"),
            (at(2022, 1, 3, 20, 0, 0), "há 4 meses"),
            (at(2021, 4, 3, 20, 0, 0), "há cerca de 1 ano"),
            (at(2020, 10, 3, 20, 0, 0), "há mais de 1 ano"),
            (at(2019, 7, 3, 20, 0, 0), "há quase 3 anos"),
        ];

        for (published, expected) in cases {
            assert_eq!(format_relative(&published, &now), expected, "published at {}", published);
        }
    }

    #[test]
    fn future_dates_use_em() {
        let now = at(2022, 5, 3, 20, 0, 0);
        assert_eq!(format_relative(&(now + Duration::days(2)), &now), "em 2 dias");
    }

    #[test]
    fn refresh_and_staleness() {
        let published = at(2022, 5, 3, 20, 0, 0);
        let mut label = PublishedLabel::compute(published, &Utc, published + Duration::minutes(5));
        assert_eq!(label.relative, "há 5 minutos");

        let later = published + Duration::minutes(20);
        assert!(label.is_stale(later, Duration::minutes(1)));
        assert!(label.refresh(later));
        assert_eq!(label.relative, "há 20 minutos");
        assert!(!label.is_stale(later, Duration::minutes(1)));
        assert!(!label.refresh(later + Duration::seconds(5)));
    }
}
