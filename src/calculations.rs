//! Fixed arithmetic demo on two integers.

use std::fmt;

use crate::error::GreeterError;

pub const A: i32 = 10;
pub const B: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Returns `None` on overflow or division by zero. Division truncates toward zero.
    pub fn apply(&self, a: i32, b: i32) -> Option<i32> {
        match self {
            Operation::Add => a.checked_add(b),
            Operation::Subtract => a.checked_sub(b),
            Operation::Multiply => a.checked_mul(b),
            Operation::Divide => a.checked_div(b),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Calculation {
    pub a: i32,
    pub b: i32,
    pub operation: Operation,
    pub result: i32,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.a,
            self.operation.symbol(),
            self.b,
            self.result
        )
    }
}

pub fn calculate(a: i32, b: i32) -> Result<Vec<Calculation>, GreeterError> {
    Operation::ALL
        .iter()
        .map(|&operation| -> Result<Calculation, GreeterError> {
            let result = operation.apply(a, b).ok_or(GreeterError::Arithmetic {
                a,
                b,
                symbol: operation.symbol(),
            })?;
            Ok(Calculation {
                a,
                b,
                operation,
                result,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(a: i32, b: i32) -> Vec<String> {
        calculate(a, b)
            .unwrap()
            .iter()
            .map(|calculation| calculation.to_string())
            .collect()
    }

    #[test]
    fn fixed_constants() {
        assert_eq!(
            lines(A, B),
            vec!["10 + 5 = 15", "10 - 5 = 5", "10 * 5 = 50", "10 / 5 = 2"]
        );
    }

    #[test]
    fn division_truncates() {
        assert_eq!(Operation::Divide.apply(7, 2), Some(3));
        assert_eq!(Operation::Divide.apply(-7, 2), Some(-3));
        assert_eq!(lines(7, 2)[3], "7 / 2 = 3");
    }

    #[test]
    fn negative_operand_formatting() {
        assert_eq!(lines(3, -4)[0], "3 + -4 = -1");
    }

    #[test]
    fn division_by_zero() {
        assert!(matches!(
            calculate(10, 0),
            Err(GreeterError::Arithmetic { symbol: '/', .. })
        ));
    }

    #[test]
    fn overflow() {
        assert_eq!(Operation::Multiply.apply(i32::MAX, 2), None);
        assert!(matches!(
            calculate(i32::MAX, 1),
            Err(GreeterError::Arithmetic { symbol: '+', .. })
        ));
    }
}
