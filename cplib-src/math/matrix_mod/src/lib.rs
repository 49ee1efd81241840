use std::{
    fmt,
    ops::{Add, Index, IndexMut, Mul},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatrixMod<const MOD: u64> {
    nrows: usize,
    ncols: usize,
    buf: Vec<Vec<u64>>,
}

impl<const MOD: u64> MatrixMod<MOD> {
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols, buf: vec![vec![0; ncols]; nrows] }
    }
    pub fn identity(n: usize) -> Self {
        let mut res = Self::new(n, n);
        for i in 0..n {
            res.buf[i][i] = 1 % MOD;
        }
        res
    }
    pub fn nrows(&self) -> usize { self.nrows }
    pub fn ncols(&self) -> usize { self.ncols }

    /// Discards all entries and zero-fills at the new dimensions.
    pub fn resize(&mut self, nrows: usize, ncols: usize) {
        self.nrows = nrows;
        self.ncols = ncols;
        self.buf = vec![vec![0; ncols]; nrows];
    }

    pub fn pow(&self, mut k: u64) -> Self {
        assert_eq!(
            self.nrows, self.ncols,
            "matrix must be square: {}x{}",
            self.nrows, self.ncols,
        );
        let mut res = Self::identity(self.nrows);
        let mut dbl = self.clone();
        while k > 0 {
            if k & 1 != 0 {
                res = &res * &dbl;
            }
            dbl = &dbl * &dbl;
            k >>= 1;
        }
        res
    }
}

impl<const MOD: u64> Index<usize> for MatrixMod<MOD> {
    type Output = [u64];
    fn index(&self, i: usize) -> &[u64] { &self.buf[i] }
}

impl<const MOD: u64> IndexMut<usize> for MatrixMod<MOD> {
    fn index_mut(&mut self, i: usize) -> &mut [u64] { &mut self.buf[i] }
}

impl<const MOD: u64> Add for &MatrixMod<MOD> {
    type Output = MatrixMod<MOD>;
    fn add(self, rhs: Self) -> Self::Output {
        assert!(
            self.nrows == rhs.nrows && self.ncols == rhs.ncols,
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols,
        );
        let mut res = MatrixMod::new(self.nrows, self.ncols);
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                let tmp = self.buf[i][j] as u128 + rhs.buf[i][j] as u128;
                res.buf[i][j] = (tmp % MOD as u128) as u64;
            }
        }
        res
    }
}

impl<const MOD: u64> Mul for &MatrixMod<MOD> {
    type Output = MatrixMod<MOD>;
    fn mul(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let mut res = MatrixMod::new(self.nrows, rhs.ncols);
        for i in 0..self.nrows {
            for k in 0..self.ncols {
                let lhs_ik = self.buf[i][k] as u128;
                for j in 0..rhs.ncols {
                    let tmp = res.buf[i][j] as u128
                        + lhs_ik * rhs.buf[k][j] as u128;
                    res.buf[i][j] = (tmp % MOD as u128) as u64;
                }
            }
        }
        res
    }
}

macro_rules! impl_op_forward {
    ( $( impl $op_trait:ident, $op:ident; )* ) => { $(
        impl<const MOD: u64> $op_trait for MatrixMod<MOD> {
            type Output = MatrixMod<MOD>;
            fn $op(self, rhs: Self) -> Self::Output { (&self).$op(&rhs) }
        }
        impl<const MOD: u64> $op_trait<&MatrixMod<MOD>> for MatrixMod<MOD> {
            type Output = MatrixMod<MOD>;
            fn $op(self, rhs: &MatrixMod<MOD>) -> Self::Output {
                (&self).$op(rhs)
            }
        }
        impl<const MOD: u64> $op_trait<MatrixMod<MOD>> for &MatrixMod<MOD> {
            type Output = MatrixMod<MOD>;
            fn $op(self, rhs: MatrixMod<MOD>) -> Self::Output {
                self.$op(&rhs)
            }
        }
    )* };
}

impl_op_forward! {
    impl Add, add;
    impl Mul, mul;
}

// One row per line, entries separated by a single space.
impl<const MOD: u64> fmt::Display for MatrixMod<MOD> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.buf.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{x}")?;
            }
        }
        Ok(())
    }
}

pub type Matrix998244353 = MatrixMod<998244353>;
pub type Matrix1000000007 = MatrixMod<1000000007>;

#[cfg(test)]
fn mat<const MOD: u64>(entries: &[&[u64]]) -> MatrixMod<MOD> {
    let ncols = entries.first().map_or(0, |row| row.len());
    let mut res = MatrixMod::new(entries.len(), ncols);
    for (i, row) in entries.iter().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            res[i][j] = x;
        }
    }
    res
}

#[test]
fn arithmetic() {
    type Mat = Matrix1000000007;

    let a: Mat = mat(&[&[1, 2], &[3, 4]]);
    let b: Mat = mat(&[&[5, 6], &[7, 8]]);

    assert_eq!(&a + &b, mat(&[&[6, 8], &[10, 12]]));
    assert_eq!(&a * &b, mat(&[&[19, 22], &[43, 50]]));
    assert_eq!(a.clone() + b.clone(), &a + &b);
    assert_eq!(a.clone() * b.clone(), &a * &b);
}

#[test]
fn reduction() {
    type Mat = MatrixMod<10>;

    let a: Mat = mat(&[&[7, 8], &[9, 6]]);
    assert_eq!(&a + &a, mat(&[&[4, 6], &[8, 2]]));
    assert_eq!(&a * &a, mat(&[&[1, 4], &[7, 8]]));

    // With modulus 1 everything collapses to zero.
    let id = MatrixMod::<1>::identity(2);
    assert_eq!(id, MatrixMod::<1>::new(2, 2));
}

#[test]
fn add_laws() {
    type Mat = Matrix998244353;

    let a: Mat = mat(&[&[1, 998244352], &[3, 4]]);
    let b: Mat = mat(&[&[5, 6], &[998244350, 8]]);
    let c: Mat = mat(&[&[9, 10], &[11, 998244340]]);

    assert_eq!(&a + &b, &b + &a);
    assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
}

#[test]
fn mul_laws() {
    type Mat = Matrix998244353;

    let a: Mat = mat(&[&[1, 2], &[3, 4]]);
    let b: Mat = mat(&[&[5, 6, 7], &[8, 9, 10]]);
    let c: Mat = mat(&[&[11], &[998244352], &[13]]);

    assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
}

#[test]
fn identity() {
    type Mat = Matrix1000000007;

    let a: Mat = mat(&[&[1, 2, 3], &[4, 5, 6]]);
    assert_eq!(&Mat::identity(2) * &a, a);
    assert_eq!(&a * &Mat::identity(3), a);

    let id = Mat::identity(3);
    assert_eq!(&id * &id, id);
}

#[test]
fn pow() {
    type Mat = Matrix1000000007;

    let fib: Mat = mat(&[&[1, 1], &[1, 0]]);
    assert_eq!(fib.pow(0), Mat::identity(2));
    assert_eq!(fib.pow(1), fib);
    assert_eq!(fib.pow(9)[0][0], 55); // F(10)

    let a = fib.pow(5);
    let b = fib.pow(7);
    assert_eq!(fib.pow(12), &a * &b);

    let big = &fib.pow(1_000_000_000) * &fib.pow(234_567);
    assert_eq!(big, fib.pow(1_000_234_567));
}

#[test]
fn resize() {
    type Mat = Matrix1000000007;

    let mut a: Mat = mat(&[&[1, 2], &[3, 4]]);
    a.resize(3, 1);
    assert_eq!((a.nrows(), a.ncols()), (3, 1));
    assert_eq!(a, Mat::new(3, 1));
}

#[test]
fn display() {
    type Mat = Matrix1000000007;

    let a: Mat = mat(&[&[1, 2], &[3, 4]]);
    assert_eq!(format!("{a}"), "1 2\n3 4");
    assert_eq!(format!("{}", Mat::identity(1)), "1");
    assert_eq!(format!("{}", Mat::new(0, 0)), "");
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn add_mismatch() {
    type Mat = Matrix1000000007;
    let _ = Mat::new(2, 2) + Mat::new(2, 3);
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn mul_mismatch() {
    type Mat = Matrix1000000007;
    let _ = Mat::new(2, 3) * Mat::new(2, 3);
}

#[test]
#[should_panic(expected = "square")]
fn pow_non_square() {
    type Mat = Matrix1000000007;
    let _ = Mat::new(2, 3).pow(2);
}
