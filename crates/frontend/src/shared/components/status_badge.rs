use contracts::enums::StatusTone;
use leptos::prelude::*;

/// CSS modifier for a tone. Unknown wire values arrive here as
/// `StatusTone::Neutral` and get the grey badge.
pub fn tone_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Success => "badge--success",
        StatusTone::Info => "badge--primary",
        StatusTone::Warning => "badge--warning",
        StatusTone::Danger => "badge--error",
        StatusTone::Neutral => "badge--neutral",
    }
}

#[component]
pub fn StatusBadge(label: &'static str, tone: StatusTone) -> impl IntoView {
    view! {
        <span class=format!("badge {}", tone_class(tone))>{label}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{DeliveryStatus, VehicleStatus};

    #[test]
    fn every_tone_has_a_distinct_class() {
        let classes = [
            tone_class(StatusTone::Success),
            tone_class(StatusTone::Info),
            tone_class(StatusTone::Warning),
            tone_class(StatusTone::Danger),
            tone_class(StatusTone::Neutral),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_statuses_fall_back_to_neutral() {
        assert_eq!(tone_class(DeliveryStatus::Unknown.tone()), "badge--neutral");
        assert_eq!(tone_class(VehicleStatus::Unknown.tone()), "badge--neutral");
    }
}
