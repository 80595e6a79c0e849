/*!
A lazy iterator over the cartesian product of a sequence of axes.

The product is produced on demand, in lexicographic order over the axes, by an odometer over one index per axis.
So, entailment checks may short-circuit on the first falsifying candidate without paying for full materialisation.

The iterator is restartable via [restart](Product::restart), which rewinds the odometer without touching the axes.

Three uses are made of the product within the library:
- World generation, with an axis per (attribute, object) pair ([worlds](crate::structures::state::State::worlds)).
- Variable-assignment generation, with an axis per unbound variable ([total_extensions](crate::structures::assignment::VariableAssignment::total_extensions)).
- Completion enumeration for atomic formulas, with an axis per referenced ascription.

# An edge

The product of no axes is the singleton of the empty tuple, and the iterator yields accordingly.
This is relied on: a variable assignment with nothing unbound has exactly one total extension --- itself.
*/

/// A lazy cartesian product over owned axes.
#[derive(Clone, Debug)]
pub struct Product<T: Clone> {
    /// The axes of the product, fixed on construction.
    axes: Vec<Vec<T>>,

    /// One index per axis, the odometer.
    indices: Vec<usize>,

    /// Set when the odometer has rolled over (or some axis is empty).
    exhausted: bool,
}

impl<T: Clone> Product<T> {
    pub fn new(axes: Vec<Vec<T>>) -> Self {
        let exhausted = axes.iter().any(|axis| axis.is_empty());
        let indices = vec![0; axes.len()];

        Product {
            axes,
            indices,
            exhausted,
        }
    }

    /// Rewind the odometer, so iteration may begin again.
    pub fn restart(&mut self) {
        for index in &mut self.indices {
            *index = 0;
        }
        self.exhausted = self.axes.iter().any(|axis| axis.is_empty());
    }

    /// The count of tuples the product contains, without enumeration.
    pub fn size(&self) -> usize {
        self.axes.iter().map(|axis| axis.len()).product()
    }
}

impl<T: Clone> Iterator for Product<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let tuple = self
            .indices
            .iter()
            .zip(&self.axes)
            .map(|(&index, axis)| axis[index].clone())
            .collect();

        // Advance the odometer, last axis fastest.
        let mut rolled_over = true;
        for position in (0..self.axes.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.axes[position].len() {
                rolled_over = false;
                break;
            }
            self.indices[position] = 0;
        }

        if rolled_over {
            self.exhausted = true;
        }

        Some(tuple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic() {
        let product = Product::new(vec![vec![0, 1], vec![0, 1, 2]]);

        let tuples = product.collect::<Vec<_>>();

        assert_eq!(tuples.len(), 6);
        assert_eq!(tuples.first(), Some(&vec![0, 0]));
        assert_eq!(tuples.last(), Some(&vec![1, 2]));
    }

    #[test]
    fn empty_axis() {
        let mut product = Product::new(vec![vec![1], vec![]]);

        assert_eq!(product.size(), 0);
        assert_eq!(product.next(), None);
    }

    #[test]
    fn no_axes() {
        let empty: Vec<Vec<u8>> = vec![];
        let mut product = Product::new(empty);

        assert_eq!(product.size(), 1);
        assert_eq!(product.next(), Some(vec![]));
        assert_eq!(product.next(), None);
    }

    #[test]
    fn restart() {
        let mut product = Product::new(vec![vec![0, 1], vec![0, 1]]);

        assert_eq!(product.by_ref().count(), 4);
        assert_eq!(product.next(), None);

        product.restart();
        assert_eq!(product.count(), 4);
    }
}
