use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::state::Assignment;

/// A single disjunctive clause over signed literals.
///
/// A positive literal `v` asks for variable `v` to be true; a negative
/// literal `-v` asks for it to be false. The clause is satisfied when at
/// least one literal holds; an empty clause is never satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<i32>,
}

impl Clause {
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    pub fn literals(&self) -> &[i32] {
        &self.literals
    }

    /// Evaluates the clause under the given assignment.
    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        self.literals
            .iter()
            .any(|&literal| assignment.literal_value(literal))
    }
}

/// An immutable MaxSAT instance: a variable count plus an ordered clause set.
///
/// Invariant: every literal's magnitude lies in `[1, num_vars]`. `parse`
/// enforces this with line-level errors; `new` assumes callers uphold it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    num_vars: usize,
    clauses: Vec<Clause>,
}

impl Problem {
    pub fn new(num_vars: usize, clauses: Vec<Clause>) -> Self {
        debug_assert!(clauses.iter().all(|clause| {
            clause
                .literals()
                .iter()
                .all(|&lit| lit != 0 && lit.unsigned_abs() as usize <= num_vars)
        }));
        Self { num_vars, clauses }
    }

    /// Reads a problem description from a file.
    ///
    /// See [`Problem::parse`] for the format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parses a problem from its plain-text description.
    ///
    /// The first line carries the variable count as its first
    /// whitespace-separated token; any further header tokens are ignored.
    /// Every following non-blank line lists one clause as whitespace-separated
    /// integers, where the last token is a conventional terminator (typically
    /// `0`) and is discarded. Blank lines are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipsat::Problem;
    ///
    /// let problem = Problem::parse("3\n1 2 0\n-1 3 0\n-2 -3 0\n").unwrap();
    /// assert_eq!(problem.num_vars(), 3);
    /// assert_eq!(problem.num_clauses(), 3);
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = input.lines();
        let header = lines.next().ok_or(Error::MissingHeader)?;
        let token = header
            .split_whitespace()
            .next()
            .ok_or(Error::MissingHeader)?;
        let num_vars: usize = token.parse().map_err(|_| Error::InvalidVariableCount {
            token: token.to_string(),
        })?;

        let mut clauses = Vec::new();
        for (index, line) in lines.enumerate() {
            let line_number = index + 2;
            let mut literals = Vec::new();
            for tok in line.split_whitespace() {
                let literal: i32 = tok.parse().map_err(|_| Error::InvalidLiteral {
                    line: line_number,
                    token: tok.to_string(),
                })?;
                literals.push(literal);
            }
            if literals.is_empty() {
                continue;
            }
            literals.pop();
            for &literal in &literals {
                let var = literal.unsigned_abs() as usize;
                if var == 0 || var > num_vars {
                    return Err(Error::LiteralOutOfRange {
                        line: line_number,
                        literal,
                        num_vars,
                    });
                }
            }
            clauses.push(Clause::new(literals));
        }
        Ok(Self { num_vars, clauses })
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Counts the clauses satisfied by `assignment`.
    ///
    /// Pure full scan over the clause set; the result lies in
    /// `[0, num_clauses]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipsat::{Assignment, Problem};
    ///
    /// let problem = Problem::parse("3\n1 2 0\n-1 3 0\n-2 -3 0\n").unwrap();
    /// let assignment = Assignment::from_values(vec![true, false, true]);
    /// assert_eq!(problem.fitness(&assignment), 3);
    /// ```
    pub fn fitness(&self, assignment: &Assignment) -> usize {
        self.clauses
            .iter()
            .filter(|clause| clause.is_satisfied(assignment))
            .count()
    }
}
