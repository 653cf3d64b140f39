/*!
Builds combinations of variants by taking one of each group.

See the [rule of product](http://en.wikipedia.org/wiki/Rule_of_product).

For example, to build baskets with one product of each category:
```
use ib_hebon::combo::ComboBuilder;

let mut builder = ComboBuilder::new();
builder
    .new_group()?.variant("apple").variant("banana").variant("orange")
    .new_group()?.variant("chocolate")
    .new_group()?.variant("water").variant("wine");
assert_eq!(builder.product_size()?, 6);
assert_eq!(
    builder.build()?,
    [
        ["apple", "chocolate", "water"],
        ["banana", "chocolate", "water"],
        ["orange", "chocolate", "water"],
        ["apple", "chocolate", "wine"],
        ["banana", "chocolate", "wine"],
        ["orange", "chocolate", "wine"],
    ]
);
# Ok::<(), ib_hebon::combo::StateError>(())
```

## Order
The order of combinations is part of the API:
- The first group's variants vary fastest.
- A later group with more than one variant repeats the entire prior result
  once per variant, in the group's variant order.

If the variants need weights, wrap them into a type carrying the weight and
sort or filter the built combinations by the summed weights.
*/
use thiserror::Error;

/// The last group is empty, or nothing was added at all.
///
/// Add a variant to the group first.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("last group is empty")]
pub struct StateError;

#[derive(Clone, Debug)]
pub struct ComboBuilder<T> {
    /// The last one is the current group.
    groups: Vec<Vec<T>>,
}

impl<T> Default for ComboBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ComboBuilder<T> {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Start a new group.
    ///
    /// Fails if the current group is empty. See [`is_group_empty()`](Self::is_group_empty).
    pub fn new_group(&mut self) -> Result<&mut Self, StateError> {
        if !self.groups.is_empty() {
            self.check_group_not_empty()?;
        }
        self.groups.push(Vec::new());
        Ok(self)
    }

    /// Add `variant` to the current group.
    ///
    /// If no group was started by [`new_group()`](Self::new_group), one is started.
    pub fn variant(&mut self, variant: T) -> &mut Self {
        match self.groups.last_mut() {
            Some(group) => group.push(variant),
            None => self.groups.push(vec![variant]),
        }
        self
    }

    /// Call [`variant()`](Self::variant) for each item.
    pub fn variants(&mut self, variants: impl IntoIterator<Item = T>) -> &mut Self {
        for variant in variants {
            self.variant(variant);
        }
        self
    }

    /// Whether there is no group or the current group is empty.
    pub fn is_group_empty(&self) -> bool {
        self.groups.last().is_none_or(Vec::is_empty)
    }

    /// Whether nothing was added at all.
    pub fn is_empty(&self) -> bool {
        match self.groups.as_slice() {
            [] => true,
            [group] => group.is_empty(),
            _ => false,
        }
    }

    fn check_group_not_empty(&self) -> Result<(), StateError> {
        if self.is_group_empty() {
            Err(StateError)
        } else {
            Ok(())
        }
    }

    /// The product of all group sizes, i.e. the number of combinations
    /// [`build()`](Self::build) would return.
    ///
    /// Use this to bail out early when the groups are too large or too many
    /// to build all combinations. Saturates at [`u64::MAX`].
    pub fn product_size(&self) -> Result<u64, StateError> {
        self.check_group_not_empty()?;
        Ok(self
            .groups
            .iter()
            .fold(1u64, |total, group| total.saturating_mul(group.len() as u64)))
    }
}

impl<T: Clone> ComboBuilder<T> {
    /// Build all combinations, in the [order](self#order) of the module docs.
    ///
    /// The result is never empty.
    pub fn build(&self) -> Result<Vec<Vec<T>>, StateError> {
        self.check_group_not_empty()?;

        let mut groups = self.groups.iter();
        let Some(first) = groups.next() else {
            return Err(StateError);
        };
        let mut combos: Vec<Vec<T>> = first
            .iter()
            .map(|variant| {
                let mut combo = Vec::with_capacity(self.groups.len());
                combo.push(variant.clone());
                combo
            })
            .collect();

        for group in groups {
            match group.as_slice() {
                [variant] => {
                    for combo in &mut combos {
                        combo.push(variant.clone());
                    }
                }
                _ => {
                    let mut next = Vec::with_capacity(combos.len() * group.len());
                    for variant in group {
                        for combo in &combos {
                            let mut combo = combo.clone();
                            combo.push(variant.clone());
                            next.push(combo);
                        }
                    }
                    combos = next;
                }
            }
        }
        Ok(combos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basket() {
        let mut builder = ComboBuilder::new();
        builder
            .new_group()
            .unwrap()
            .variant("apple")
            .variant("banana")
            .variant("orange")
            .new_group()
            .unwrap()
            .variant("chocolate")
            .new_group()
            .unwrap()
            .variant("water")
            .variant("wine");

        let expected_total = builder.product_size().unwrap();
        let result = builder.build().unwrap();
        assert_eq!(expected_total, result.len() as u64);
        assert_eq!(result.len(), 6);
        assert_eq!(result[0], ["apple", "chocolate", "water"]);
        assert_eq!(result[1], ["banana", "chocolate", "water"]);
        assert_eq!(result[3], ["apple", "chocolate", "wine"]);
        assert_eq!(result[5], ["orange", "chocolate", "wine"]);
    }

    #[test]
    fn order() {
        let mut builder = ComboBuilder::new();
        builder.variants([1, 2]);
        builder.new_group().unwrap().variants([10, 20, 30]);
        assert_eq!(
            builder.build().unwrap(),
            [
                [1, 10],
                [2, 10],
                [1, 20],
                [2, 20],
                [1, 30],
                [2, 30]
            ]
        );

        builder.new_group().unwrap().variants([100, 200]);
        let result = builder.build().unwrap();
        assert_eq!(result.len(), 12);
        assert_eq!(result[0], [1, 10, 100]);
        assert_eq!(result[5], [2, 30, 100]);
        assert_eq!(result[6], [1, 10, 200]);
        assert_eq!(result[11], [2, 30, 200]);
    }

    #[test]
    fn product_size() {
        let cases: [&[usize]; 5] = [&[1], &[3], &[2, 1, 3], &[1, 1, 1, 1], &[4, 2, 2, 1, 3]];
        for sizes in cases {
            let mut builder = ComboBuilder::new();
            for &size in sizes {
                builder.new_group().unwrap().variants(0..size);
            }
            let product: usize = sizes.iter().product();
            assert_eq!(builder.product_size().unwrap(), product as u64);
            assert_eq!(builder.build().unwrap().len(), product, "{sizes:?}");
        }
    }

    #[test]
    fn single() {
        let mut builder = ComboBuilder::new();
        builder.variant("only");
        assert_eq!(builder.build().unwrap(), [["only"]]);
    }

    #[test]
    fn empty_group() {
        let mut builder = ComboBuilder::<&str>::new();
        assert_eq!(builder.product_size(), Err(StateError));
        assert_eq!(builder.build(), Err(StateError));

        builder.new_group().unwrap();
        assert_eq!(builder.new_group().err(), Some(StateError));
        assert_eq!(builder.product_size(), Err(StateError));
        assert_eq!(builder.build(), Err(StateError));

        builder.variant("foo");
        builder.new_group().unwrap();
        assert_eq!(builder.product_size(), Err(StateError));
        assert_eq!(builder.build(), Err(StateError));

        builder.variant("bar");
        assert_eq!(builder.build().unwrap(), [["foo", "bar"]]);
    }

    #[test]
    fn is_group_empty() {
        let mut builder = ComboBuilder::new();
        builder.new_group().unwrap();
        assert!(builder.is_group_empty());
        builder.variant("foo");
        assert!(!builder.is_group_empty());
        builder.new_group().unwrap();
        assert!(builder.is_group_empty());
    }

    #[test]
    fn is_empty() {
        let mut builder = ComboBuilder::new();
        assert!(builder.is_empty());
        builder.new_group().unwrap();
        assert!(builder.is_empty());
        builder.variant("foo");
        assert!(!builder.is_empty());
        builder.new_group().unwrap();
        assert!(!builder.is_empty());
    }

    #[test]
    fn implicit_first_group() {
        let mut builder = ComboBuilder::new();
        assert!(builder.is_group_empty());
        builder.variant("foo");
        assert!(!builder.is_group_empty());
        assert_eq!(builder.product_size(), Ok(1));
    }
}
