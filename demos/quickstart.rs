use calperiod::{
    broadcast_month_range, months_in_range, segment_to_broadcast_days, Instant, PeriodKind,
};
use chrono::{NaiveDate, Utc};

fn main() {
    let today = Utc::now().date_naive();
    let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid date");

    println!("Broadcast month of {today}: {}", broadcast_month_range(today));

    for month in months_in_range(ymd(2024, 1, 15), ymd(2024, 3, 10)) {
        println!("Month starting {month}");
    }

    let from: Instant = "2024-06-13T03:00:00".parse().expect("valid instant");
    for piece in segment_to_broadcast_days(from, ymd(2024, 6, 14)) {
        println!("Broadcast-day piece: {piece}");
    }

    for kind in PeriodKind::ALL {
        println!("{:>16}: {}", kind.name(), kind.range(today));
    }
}
