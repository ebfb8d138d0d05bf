use tariff_core::{PriceKey, PricedInterval};

use super::{Scenario, price, product1};

pub const NAMES: &[&str] = &[
    "different_products",
    "different_numbers",
    "different_departs",
    "dates_no_intersect",
    "same_value_overlap",
    "different_value_overlap",
    "new_inside_old",
    "new_covers_old",
    "two_news_inside_old",
    "new_spans_two_olds",
    "same_value_then_disjoint_old",
    "empty_old",
    "empty_new",
    "both_empty",
];

const JAN_05: (i32, u32, u32) = (2013, 1, 5);
const JAN_31: (i32, u32, u32) = (2013, 1, 31);

fn base_old() -> PricedInterval {
    price(1, &product1(), JAN_05, JAN_31, 80)
}

fn scenario(
    name: &'static str,
    old: Vec<PricedInterval>,
    new: Vec<PricedInterval>,
    expected: Vec<PricedInterval>,
) -> Scenario {
    Scenario {
        name,
        old,
        new,
        expected,
    }
}

// Old |-----|  same dates, other key
fn other_key(name: &'static str, key: &PriceKey) -> Scenario {
    let old = base_old();
    let new = price(2, key, JAN_05, JAN_31, 80);
    scenario(name, vec![old.clone()], vec![new.clone()], vec![old, new])
}

pub fn build(name: &str) -> Option<Scenario> {
    let p1 = product1();
    let s = match name {
        "different_products" => other_key("different_products", &PriceKey::new("product2", 1, 1)),
        "different_numbers" => other_key("different_numbers", &PriceKey::new("product1", 2, 1)),
        "different_departs" => other_key("different_departs", &PriceKey::new("product1", 1, 2)),
        // Old |-----|
        // New          |-----|
        "dates_no_intersect" => {
            let old = base_old();
            let new = price(2, &p1, (2013, 3, 1), (2013, 3, 31), 80);
            scenario(
                "dates_no_intersect",
                vec![old.clone()],
                vec![new.clone()],
                vec![old, new],
            )
        }
        // Old |-----|     80
        // New     |-----| 80
        "same_value_overlap" => scenario(
            "same_value_overlap",
            vec![base_old()],
            vec![price(2, &p1, (2013, 1, 15), (2013, 2, 15), 80)],
            vec![price(1, &p1, JAN_05, (2013, 2, 15), 80)],
        ),
        // Old |-----|     80
        // New     |-----| 90
        "different_value_overlap" => {
            let new = price(2, &p1, (2013, 1, 15), (2013, 2, 15), 90);
            scenario(
                "different_value_overlap",
                vec![base_old()],
                vec![new.clone()],
                vec![price(1, &p1, JAN_05, (2013, 1, 15), 80), new],
            )
        }
        // Old |------------| 80
        // New     |-----|    90
        "new_inside_old" => {
            let new = price(2, &p1, (2013, 1, 10), (2013, 1, 15), 90);
            scenario(
                "new_inside_old",
                vec![base_old()],
                vec![new.clone()],
                vec![
                    price(1, &p1, JAN_05, (2013, 1, 10), 80),
                    price(1, &p1, (2013, 1, 15), JAN_31, 80),
                    new,
                ],
            )
        }
        // Old    |-----|    80
        // New  |---------|  90
        "new_covers_old" => {
            let new = price(2, &p1, (2013, 1, 1), (2013, 2, 15), 90);
            scenario("new_covers_old", vec![base_old()], vec![new.clone()], vec![new])
        }
        // Old |-----------------| 80
        // New   |-----| |-----|   90, 75
        "two_news_inside_old" => {
            let n1 = price(2, &p1, (2013, 1, 10), (2013, 1, 15), 90);
            let n2 = price(3, &p1, (2013, 1, 20), (2013, 1, 25), 75);
            scenario(
                "two_news_inside_old",
                vec![base_old()],
                vec![n1.clone(), n2.clone()],
                vec![
                    price(1, &p1, JAN_05, (2013, 1, 10), 80),
                    price(1, &p1, (2013, 1, 15), (2013, 1, 20), 80),
                    price(1, &p1, (2013, 1, 25), JAN_31, 80),
                    n1,
                    n2,
                ],
            )
        }
        // Old |------||-----| 80, 85
        // New     |-----|     90
        "new_spans_two_olds" => {
            let old2 = price(2, &p1, JAN_31, (2013, 2, 28), 85);
            let new = price(3, &p1, (2013, 1, 10), (2013, 2, 20), 90);
            scenario(
                "new_spans_two_olds",
                vec![base_old(), old2],
                vec![new.clone()],
                vec![
                    price(1, &p1, JAN_05, (2013, 1, 10), 80),
                    price(2, &p1, (2013, 2, 20), (2013, 2, 28), 85),
                    new,
                ],
            )
        }
        // Old |------|       |-----| 80, 85
        // New      |-----|           80
        "same_value_then_disjoint_old" => {
            let old2 = price(2, &p1, (2013, 2, 15), (2013, 2, 28), 85);
            scenario(
                "same_value_then_disjoint_old",
                vec![base_old(), old2.clone()],
                vec![price(3, &p1, (2013, 1, 10), (2013, 2, 10), 80)],
                vec![old2, price(1, &p1, JAN_05, (2013, 2, 10), 80)],
            )
        }
        "empty_old" => {
            let new = price(2, &PriceKey::new("product2", 1, 1), JAN_05, JAN_31, 80);
            scenario("empty_old", vec![], vec![new.clone()], vec![new])
        }
        "empty_new" => scenario("empty_new", vec![base_old()], vec![], vec![base_old()]),
        "both_empty" => scenario("both_empty", vec![], vec![], vec![]),
        _ => return None,
    };
    Some(s)
}
