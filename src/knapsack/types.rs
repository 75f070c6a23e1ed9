//! Knapsack problem instance.

/// One item: weight, value, and processing time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: f64,
    pub value: f64,
    pub time: f64,
}

impl Item {
    pub fn new(weight: f64, value: f64, time: f64) -> Self {
        Self {
            weight,
            value,
            time,
        }
    }
}

impl From<(f64, f64, f64)> for Item {
    fn from((weight, value, time): (f64, f64, f64)) -> Self {
        Self::new(weight, value, time)
    }
}

/// An ordered item list with a weight capacity and a time limit.
///
/// Item order is significant: the decoder walks items front to back and
/// reports included items by index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    pub items: Vec<Item>,
    pub capacity: f64,
    pub time_limit: f64,
}

impl Knapsack {
    pub fn new(items: Vec<Item>, capacity: f64, time_limit: f64) -> Self {
        Self {
            items,
            capacity,
            time_limit,
        }
    }

    /// The eight-item instance with capacity 15 and time limit 15.
    ///
    /// ```
    /// use gp_knapsack::knapsack::Knapsack;
    ///
    /// let k = Knapsack::classic();
    /// assert_eq!(k.items.len(), 8);
    /// assert_eq!(k.capacity, 15.0);
    /// ```
    pub fn classic() -> Self {
        let items = [
            (2.0, 3.0, 2.0),
            (3.0, 4.0, 3.0),
            (4.0, 5.0, 4.0),
            (5.0, 8.0, 5.0),
            (8.0, 10.0, 8.0),
            (4.0, 7.0, 4.0),
            (2.0, 6.0, 2.0),
            (1.0, 2.0, 1.0),
        ]
        .into_iter()
        .map(Item::from)
        .collect();
        Self::new(items, 15.0, 15.0)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_instance() {
        let k = Knapsack::classic();
        assert_eq!(k.len(), 8);
        assert_eq!(k.items[4], Item::new(8.0, 10.0, 8.0));
        assert!((k.time_limit - 15.0).abs() < 1e-12);
        let total_value: f64 = k.items.iter().map(|i| i.value).sum();
        assert!((total_value - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_item_from_tuple() {
        let item: Item = (1.0, 2.0, 3.0).into();
        assert_eq!(item.weight, 1.0);
        assert_eq!(item.value, 2.0);
        assert_eq!(item.time, 3.0);
    }

    #[test]
    fn test_empty_instance() {
        let k = Knapsack::new(vec![], 10.0, 10.0);
        assert!(k.is_empty());
    }
}
