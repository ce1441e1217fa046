use super::common::*;
use crate::workflows::maintenance::catalog::Category;
use crate::workflows::maintenance::dispatch::VendorMatcher;
use crate::workflows::maintenance::domain::{Availability, VendorId};

#[test]
fn vendors_outside_the_category_are_filtered_out() {
    let ticket = work_order(Category::Plumbing, 60);
    let pool = vec![
        vendor("quickfix", Category::Plumbing),
        vendor("powertech", Category::Electrical),
    ];

    let results = VendorMatcher.rank(&ticket, &pool);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].vendor_id, VendorId("quickfix".to_string()));
}

#[test]
fn empty_directory_yields_an_empty_ranking() {
    let ticket = work_order(Category::Hvac, 70);
    assert!(VendorMatcher.rank(&ticket, &[]).is_empty());
}

#[test]
fn preferred_vendor_outranks_an_otherwise_identical_one() {
    let ticket = work_order(Category::Plumbing, 60);
    let mut preferred = vendor("abc-plumbing", Category::Plumbing);
    preferred.preferred = true;
    let pool = vec![vendor("quickfix", Category::Plumbing), preferred];

    let results = VendorMatcher.rank(&ticket, &pool);

    assert_eq!(results[0].vendor_id, VendorId("abc-plumbing".to_string()));
    assert!(results[0]
        .reasons
        .contains(&"Preferred vendor".to_string()));
}

#[test]
fn emergency_coverage_outweighs_preferred_status_on_urgent_tickets() {
    // Priority 95 electrical outage. The preferred, higher-rated vendor loses
    // to the 24/7 one once the availability and emergency bonuses apply.
    let ticket = work_order(Category::Electrical, 95);

    let mut v1 = vendor("v1-proelectric", Category::Electrical);
    v1.preferred = true;
    v1.rating = 4.8;
    v1.avg_response_time_minutes = 2;
    v1.availability = Availability::Available;

    let mut v2 = vendor("v2-powertech", Category::Electrical);
    v2.rating = 4.6;
    v2.avg_response_time_minutes = 1;
    v2.availability = Availability::TwentyFourSeven;

    let results = VendorMatcher.rank(&ticket, &[v1, v2]);

    assert_eq!(results[0].vendor_id, VendorId("v2-powertech".to_string()));
    assert!(results[0]
        .reasons
        .contains(&"Fast response time".to_string()));
    assert!(results[0]
        .reasons
        .contains(&"Emergency coverage for urgent ticket".to_string()));
}

#[test]
fn no_emergency_bonus_at_or_below_the_priority_threshold() {
    let ticket = work_order(Category::Electrical, 80);
    let mut around_the_clock = vendor("powertech", Category::Electrical);
    around_the_clock.availability = Availability::TwentyFourSeven;

    let results = VendorMatcher.rank(&ticket, &[around_the_clock]);

    assert!(!results[0]
        .reasons
        .contains(&"Emergency coverage for urgent ticket".to_string()));
    assert!(results[0].reasons.contains(&"Available 24/7".to_string()));
}

#[test]
fn reported_score_is_clamped_but_ordering_is_not() {
    // Both vendors exceed 100 raw; the higher raw score must still win even
    // though both report exactly 100.
    let ticket = work_order(Category::Electrical, 95);

    let mut strong = vendor("strong", Category::Electrical);
    strong.preferred = true;
    strong.rating = 5.0;
    strong.avg_response_time_minutes = 1;
    strong.availability = Availability::TwentyFourSeven;
    strong.hourly_rate = 50;

    let mut stronger = strong.clone();
    stronger.id = VendorId("stronger".to_string());
    stronger.hourly_rate = 40;

    let results = VendorMatcher.rank(&ticket, &[strong, stronger]);

    assert_eq!(results[0].vendor_id, VendorId("stronger".to_string()));
    assert_eq!(results[0].match_score, 100.0);
    assert_eq!(results[1].match_score, 100.0);
}

#[test]
fn expensive_vendors_sink_below_the_cost_baseline() {
    let ticket = work_order(Category::Hvac, 50);

    let mut pricey = vendor("alltemp", Category::Hvac);
    pricey.hourly_rate = 200;
    let cheap = vendor("handypro", Category::Hvac);

    let results = VendorMatcher.rank(&ticket, &[pricey, cheap]);

    assert_eq!(results[0].vendor_id, VendorId("handypro".to_string()));
    assert!(!results[1]
        .reasons
        .contains(&"Cost-effective".to_string()));
    assert!(results[1].match_score < results[0].match_score);
}

#[test]
fn response_bonus_rounds_down_to_five_minute_buckets() {
    let ticket = work_order(Category::Plumbing, 60);

    // 9 and 11 minutes fall in different buckets; 9 and 6 do not.
    let mut nine = vendor("nine", Category::Plumbing);
    nine.avg_response_time_minutes = 9;
    let mut eleven = vendor("eleven", Category::Plumbing);
    eleven.avg_response_time_minutes = 11;
    let mut six = vendor("six", Category::Plumbing);
    six.avg_response_time_minutes = 6;

    let results = VendorMatcher.rank(&ticket, &[nine.clone(), eleven]);
    assert_eq!(results[0].vendor_id, VendorId("nine".to_string()));

    let tied = VendorMatcher.rank(&ticket, &[nine, six]);
    assert_eq!(tied[0].match_score, tied[1].match_score);
}

#[test]
fn ties_break_on_rating_then_vendor_id() {
    let ticket = work_order(Category::Plumbing, 60);

    // Same raw score, higher rating is compensated with a higher hourly rate.
    let mut rated = vendor("zeta", Category::Plumbing);
    rated.rating = 4.2;
    rated.hourly_rate = 110;
    let plain = vendor("alpha", Category::Plumbing);

    let results = VendorMatcher.rank(&ticket, &[plain.clone(), rated]);
    assert_eq!(results[0].vendor_id, VendorId("zeta".to_string()));

    // Fully identical vendors order by id ascending.
    let mut twin = plain.clone();
    twin.id = VendorId("beta".to_string());
    let results = VendorMatcher.rank(&ticket, &[twin, plain]);
    assert_eq!(results[0].vendor_id, VendorId("alpha".to_string()));
    assert_eq!(results[1].vendor_id, VendorId("beta".to_string()));
}

#[test]
fn ranking_is_deterministic_across_calls() {
    let ticket = work_order(Category::Plumbing, 90);
    let pool = vec![
        vendor("quickfix", Category::Plumbing),
        vendor("abc-plumbing", Category::Plumbing),
        vendor("handypro", Category::Plumbing),
    ];

    let first = VendorMatcher.rank(&ticket, &pool);
    let second = VendorMatcher.rank(&ticket, &pool);
    assert_eq!(first, second);
}
