// ============================================================================
// CARD SWAP - stacked carousel sequencing
// ============================================================================

/// Geometry of the stack
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSwapLayout {
    pub card_distance: f64,
    pub vertical_distance: f64,
    pub skew_amount: f64,
}

impl Default for CardSwapLayout {
    fn default() -> Self {
        Self {
            card_distance: 30.0,
            vertical_distance: 70.0,
            skew_amount: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub x: f64,
    pub y: f64,
    pub z_index: usize,
    pub skew: f64,
}

impl CardTransform {
    pub fn to_style(&self) -> String {
        format!(
            "transform: translate(-50%, -50%) translate3d({}px, {}px, 0) skewY({}deg); z-index: {};",
            self.x, self.y, self.skew, self.z_index
        )
    }
}

/// Initial stacking order: card 0 in front
pub fn initial_order(count: usize) -> Vec<usize> {
    (0..count).collect()
}

/// Front card goes to the back
pub fn rotate(order: &[usize]) -> Vec<usize> {
    match order.split_first() {
        Some((front, rest)) => rest.iter().copied().chain(std::iter::once(*front)).collect(),
        None => Vec::new(),
    }
}

/// Transform for the card sitting at `slot` (0 = front) in a stack of `total`
pub fn slot_transform(slot: usize, total: usize, layout: CardSwapLayout) -> CardTransform {
    CardTransform {
        x: slot as f64 * layout.card_distance,
        y: -(slot as f64) * layout.vertical_distance,
        z_index: total.saturating_sub(slot),
        skew: layout.skew_amount,
    }
}

/// Slot currently held by `card`
pub fn slot_of(order: &[usize], card: usize) -> Option<usize> {
    order.iter().position(|&c| c == card)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_cycles_back_to_start() {
        let order = initial_order(3);
        let once = rotate(&order);
        assert_eq!(once, [1, 2, 0]);
        let thrice = rotate(&rotate(&once));
        assert_eq!(thrice, order);
        assert!(rotate(&[]).is_empty());
    }

    #[test]
    fn front_card_is_on_top() {
        let layout = CardSwapLayout::default();
        let front = slot_transform(0, 3, layout);
        let back = slot_transform(2, 3, layout);
        assert_eq!(front.x, 0.0);
        assert_eq!(back.x, 60.0);
        assert_eq!(back.y, -140.0);
        assert!(front.z_index > back.z_index);
    }

    #[test]
    fn slot_lookup() {
        assert_eq!(slot_of(&[2, 0, 1], 0), Some(1));
        assert_eq!(slot_of(&[2, 0, 1], 5), None);
    }
}
