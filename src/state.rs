use std::fmt;

use rand::Rng;

/// A boolean assignment over variables `1..=num_vars`.
///
/// Index 0 is a sentinel fixed to `true` so that signed literals index the
/// vector directly by magnitude. The sentinel is never flipped and never
/// appears in neighborhoods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    /// Draws a uniformly random assignment for `num_vars` variables.
    pub fn random<R: Rng>(num_vars: usize, rng: &mut R) -> Self {
        let mut values = Vec::with_capacity(num_vars + 1);
        values.push(true);
        values.extend((0..num_vars).map(|_| rng.gen_bool(0.5)));
        Self { values }
    }

    /// Builds an assignment from the variable values `1..=n`, prepending the
    /// sentinel.
    pub fn from_values(values: Vec<bool>) -> Self {
        let mut with_sentinel = Vec::with_capacity(values.len() + 1);
        with_sentinel.push(true);
        with_sentinel.extend(values);
        Self {
            values: with_sentinel,
        }
    }

    pub fn num_vars(&self) -> usize {
        self.values.len() - 1
    }

    pub fn value(&self, var: usize) -> bool {
        self.values[var]
    }

    /// Truth value of a signed literal under this assignment.
    pub fn literal_value(&self, literal: i32) -> bool {
        let value = self.values[literal.unsigned_abs() as usize];
        if literal > 0 {
            value
        } else {
            !value
        }
    }

    /// Flips one variable in place.
    pub fn flip(&mut self, var: usize) {
        debug_assert!(var >= 1 && var <= self.num_vars());
        self.values[var] = !self.values[var];
    }

    /// Returns a copy of this assignment with one variable flipped.
    pub fn flipped(&self, var: usize) -> Self {
        let mut neighbor = self.clone();
        neighbor.flip(var);
        neighbor
    }

    /// The full one-flip neighborhood, in increasing variable order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipsat::Assignment;
    ///
    /// let assignment = Assignment::from_values(vec![true, true, false]);
    /// let neighbors = assignment.all_neighbors();
    /// assert_eq!(neighbors.len(), 3);
    /// assert_eq!(neighbors[0].value(1), false);
    /// assert_eq!(neighbors[2].value(3), true);
    /// ```
    pub fn all_neighbors(&self) -> Vec<Assignment> {
        (1..=self.num_vars()).map(|var| self.flipped(var)).collect()
    }

    /// A single random one-flip neighbor.
    pub fn random_neighbor<R: Rng>(&self, rng: &mut R) -> Assignment {
        let var = rng.gen_range(1..=self.num_vars());
        self.flipped(var)
    }

    /// Variable values `1..=num_vars`, excluding the sentinel.
    pub fn variables(&self) -> &[bool] {
        &self.values[1..]
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.variables())
    }
}
