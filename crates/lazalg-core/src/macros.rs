//! Operator implementations shared by every operand type
//!
//! Each macro takes the impl generics in brackets, with a trailing comma when
//! non-empty, followed by the operand type:
//!
//! ```ignore
//! vector_ops!(impl['a, T: Element,] &'a DynamicVector<T>);
//! vector_ops!(impl[L, R,] VecAdd<L, R>);
//! ```
//!
//! A scalar on the right of `*` or `/` is any [`Element`](crate::Element)
//! matching the operand's element type, so float literals infer from the
//! operand. A scalar on the left is generated for each supported element
//! type through the recursive `*_scalar_lhs_ops!` helpers.

/// Lazy arithmetic on vector operands
macro_rules! vector_ops {
    (impl[$($g:tt)*] $ty:ty) => {
        impl<$($g)* Rhs> ::std::ops::Add<Rhs> for $ty
        where
            $ty: $crate::traits::Vector,
            Rhs: $crate::traits::Vector<Elem = <$ty as $crate::traits::Vector>::Elem>,
        {
            type Output = $crate::expr::VecAdd<$ty, Rhs>;

            fn add(self, rhs: Rhs) -> Self::Output {
                $crate::expr::VecAdd::new(self, rhs)
            }
        }

        impl<$($g)* Rhs> ::std::ops::Sub<Rhs> for $ty
        where
            $ty: $crate::traits::Vector,
            Rhs: $crate::traits::Vector<Elem = <$ty as $crate::traits::Vector>::Elem>,
        {
            type Output = $crate::expr::VecSub<$ty, Rhs>;

            fn sub(self, rhs: Rhs) -> Self::Output {
                $crate::expr::VecSub::new(self, rhs)
            }
        }

        impl<$($g)* Rhs> ::std::ops::Mul<Rhs> for $ty
        where
            $ty: $crate::traits::Vector,
            Rhs: $crate::expr::VectorProduct<$ty>,
        {
            type Output = <Rhs as $crate::expr::VectorProduct<$ty>>::Output;

            fn mul(self, rhs: Rhs) -> Self::Output {
                $crate::expr::VectorProduct::product(rhs, self)
            }
        }

        impl<$($g)* Lhs> $crate::expr::VectorProduct<Lhs> for $ty
        where
            Lhs: $crate::traits::Vector,
            $ty: $crate::traits::Vector<Elem = <Lhs as $crate::traits::Vector>::Elem>,
        {
            type Output = $crate::expr::VecMul<Lhs, $ty>;

            fn product(self, lhs: Lhs) -> Self::Output {
                $crate::expr::VecMul::new(lhs, self)
            }
        }

        impl<$($g)* S> ::std::ops::Div<S> for $ty
        where
            S: $crate::element::Element,
            $ty: $crate::traits::Vector<Elem = S>,
        {
            type Output = $crate::expr::VecDiv<$ty>;

            fn div(self, scalar: S) -> Self::Output {
                $crate::expr::VecDiv::new(self, scalar)
            }
        }

        impl<$($g)*> ::std::ops::Neg for $ty
        where
            $ty: $crate::traits::Vector,
        {
            type Output = $crate::expr::VecNeg<$ty>;

            fn neg(self) -> Self::Output {
                $crate::expr::VecNeg::new(self)
            }
        }

        impl<$($g)*> $crate::expr::Transpose for $ty
        where
            $ty: $crate::traits::Vector,
        {
            type Output = $crate::expr::Trans<$ty>;

            fn trans(self) -> Self::Output {
                $crate::expr::Trans::new(self)
            }
        }

        vector_scalar_lhs_ops!(impl[$($g)*] $ty; f32, f64, i8, i16, i32, i64, isize);
    };
}

macro_rules! vector_scalar_lhs_ops {
    (impl[$($g:tt)*] $ty:ty;) => {};
    (impl[$($g:tt)*] $ty:ty; $s:ty $(, $rest:ty)*) => {
        impl<$($g)*> ::std::ops::Mul<$ty> for $s
        where
            $ty: $crate::traits::Vector<Elem = $s>,
        {
            type Output = $crate::expr::VecScale<$ty>;

            fn mul(self, operand: $ty) -> Self::Output {
                $crate::expr::VecScale::new(operand, self)
            }
        }

        vector_scalar_lhs_ops!(impl[$($g)*] $ty; $($rest),*);
    };
}

/// `abs` for vector operands other than an absolute-value node
macro_rules! vector_abs {
    (impl[$($g:tt)*] $ty:ty) => {
        impl<$($g)*> $crate::expr::Absolute for $ty
        where
            $ty: $crate::traits::Vector,
        {
            type Output = $crate::expr::VecAbs<$ty>;

            fn abs(self) -> Self::Output {
                $crate::expr::VecAbs::new(self)
            }
        }
    };
}

/// Lazy arithmetic on matrix operands
macro_rules! matrix_ops {
    (impl[$($g:tt)*] $ty:ty) => {
        impl<$($g)* Rhs> ::std::ops::Add<Rhs> for $ty
        where
            $ty: $crate::traits::Matrix,
            Rhs: $crate::traits::Matrix<Elem = <$ty as $crate::traits::Matrix>::Elem>,
        {
            type Output = $crate::expr::MatAdd<$ty, Rhs>;

            fn add(self, rhs: Rhs) -> Self::Output {
                $crate::expr::MatAdd::new(self, rhs)
            }
        }

        impl<$($g)* Rhs> ::std::ops::Sub<Rhs> for $ty
        where
            $ty: $crate::traits::Matrix,
            Rhs: $crate::traits::Matrix<Elem = <$ty as $crate::traits::Matrix>::Elem>,
        {
            type Output = $crate::expr::MatSub<$ty, Rhs>;

            fn sub(self, rhs: Rhs) -> Self::Output {
                $crate::expr::MatSub::new(self, rhs)
            }
        }

        impl<$($g)*> ::std::ops::Neg for $ty
        where
            $ty: $crate::traits::Matrix,
        {
            type Output = $crate::expr::MatNeg<$ty>;

            fn neg(self) -> Self::Output {
                $crate::expr::MatNeg::new(self)
            }
        }

        impl<$($g)* S> ::std::ops::Mul<S> for $ty
        where
            S: $crate::element::Element,
            $ty: $crate::traits::Matrix<Elem = S>,
        {
            type Output = $crate::expr::MatScale<$ty>;

            fn mul(self, scalar: S) -> Self::Output {
                $crate::expr::MatScale::new(self, scalar)
            }
        }

        impl<$($g)* S> ::std::ops::Div<S> for $ty
        where
            S: $crate::element::Element,
            $ty: $crate::traits::Matrix<Elem = S>,
        {
            type Output = $crate::expr::MatDiv<$ty>;

            fn div(self, scalar: S) -> Self::Output {
                $crate::expr::MatDiv::new(self, scalar)
            }
        }

        matrix_scalar_lhs_ops!(impl[$($g)*] $ty; f32, f64, i8, i16, i32, i64, isize);
    };
}

/// `abs` for matrix operands other than an absolute-value node
macro_rules! matrix_abs {
    (impl[$($g:tt)*] $ty:ty) => {
        impl<$($g)*> $crate::expr::Absolute for $ty
        where
            $ty: $crate::traits::Matrix,
        {
            type Output = $crate::expr::MatAbs<$ty>;

            fn abs(self) -> Self::Output {
                $crate::expr::MatAbs::new(self)
            }
        }
    };
}

macro_rules! matrix_scalar_lhs_ops {
    (impl[$($g:tt)*] $ty:ty;) => {};
    (impl[$($g:tt)*] $ty:ty; $s:ty $(, $rest:ty)*) => {
        impl<$($g)*> ::std::ops::Mul<$ty> for $s
        where
            $ty: $crate::traits::Matrix<Elem = $s>,
        {
            type Output = $crate::expr::MatScale<$ty>;

            fn mul(self, operand: $ty) -> Self::Output {
                $crate::expr::MatScale::new(operand, self)
            }
        }

        matrix_scalar_lhs_ops!(impl[$($g)*] $ty; $($rest),*);
    };
}

/// `trans` for matrix operands other than a transpose node
macro_rules! matrix_trans {
    (impl[$($g:tt)*] $ty:ty) => {
        impl<$($g)*> $crate::expr::Transpose for $ty
        where
            $ty: $crate::traits::Matrix,
        {
            type Output = $crate::expr::MatTrans<$ty>;

            fn trans(self) -> Self::Output {
                $crate::expr::MatTrans::new(self)
            }
        }
    };
}

/// Compound assignment operators on vector destinations
///
/// # Panics
///
/// The generated operators panic with the [`MathError`](crate::MathError)
/// message when the fallible method they wrap fails.
macro_rules! vector_assign_ops {
    (impl[$($g:tt)*] $ty:ty) => {
        impl<$($g)* Rhs> ::std::ops::AddAssign<Rhs> for $ty
        where
            $ty: $crate::traits::VectorMut,
            Rhs: $crate::traits::Vector<Elem = <$ty as $crate::traits::Vector>::Elem>,
        {
            fn add_assign(&mut self, rhs: Rhs) {
                if let Err(err) = $crate::traits::VectorMut::add_assign_from(self, rhs) {
                    panic!("{}", err);
                }
            }
        }

        impl<$($g)* Rhs> ::std::ops::SubAssign<Rhs> for $ty
        where
            $ty: $crate::traits::VectorMut,
            Rhs: $crate::traits::Vector<Elem = <$ty as $crate::traits::Vector>::Elem>,
        {
            fn sub_assign(&mut self, rhs: Rhs) {
                if let Err(err) = $crate::traits::VectorMut::sub_assign_from(self, rhs) {
                    panic!("{}", err);
                }
            }
        }

        impl<$($g)* Rhs> ::std::ops::MulAssign<Rhs> for $ty
        where
            $ty: $crate::traits::VectorMut,
            Rhs: $crate::traits::Vector<Elem = <$ty as $crate::traits::Vector>::Elem>,
        {
            fn mul_assign(&mut self, rhs: Rhs) {
                if let Err(err) = $crate::traits::VectorMut::mul_assign_from(self, rhs) {
                    panic!("{}", err);
                }
            }
        }

        impl<$($g)* S> ::std::ops::DivAssign<S> for $ty
        where
            S: $crate::element::Element,
            $ty: $crate::traits::VectorMut<Elem = S>,
        {
            fn div_assign(&mut self, scalar: S) {
                if let Err(err) = $crate::traits::VectorMut::try_div_assign(self, scalar) {
                    panic!("{}", err);
                }
            }
        }

        vector_scalar_assign_ops!(impl[$($g)*] $ty; f32, f64, i8, i16, i32, i64, isize);
    };
}

macro_rules! vector_scalar_assign_ops {
    (impl[$($g:tt)*] $ty:ty;) => {};
    (impl[$($g:tt)*] $ty:ty; $s:ty $(, $rest:ty)*) => {
        impl<$($g)*> ::std::ops::MulAssign<$s> for $ty
        where
            $ty: $crate::traits::VectorMut<Elem = $s>,
        {
            fn mul_assign(&mut self, scalar: $s) {
                $crate::traits::VectorMut::scale(self, scalar);
            }
        }

        vector_scalar_assign_ops!(impl[$($g)*] $ty; $($rest),*);
    };
}

/// Compound assignment operators on matrix destinations
macro_rules! matrix_assign_ops {
    (impl[$($g:tt)*] $ty:ty) => {
        impl<$($g)* Rhs> ::std::ops::AddAssign<Rhs> for $ty
        where
            $ty: $crate::traits::MatrixMut,
            Rhs: $crate::traits::Matrix<Elem = <$ty as $crate::traits::Matrix>::Elem>,
        {
            fn add_assign(&mut self, rhs: Rhs) {
                if let Err(err) = $crate::traits::MatrixMut::add_assign_from(self, rhs) {
                    panic!("{}", err);
                }
            }
        }

        impl<$($g)* Rhs> ::std::ops::SubAssign<Rhs> for $ty
        where
            $ty: $crate::traits::MatrixMut,
            Rhs: $crate::traits::Matrix<Elem = <$ty as $crate::traits::Matrix>::Elem>,
        {
            fn sub_assign(&mut self, rhs: Rhs) {
                if let Err(err) = $crate::traits::MatrixMut::sub_assign_from(self, rhs) {
                    panic!("{}", err);
                }
            }
        }

        impl<$($g)* S> ::std::ops::MulAssign<S> for $ty
        where
            S: $crate::element::Element,
            $ty: $crate::traits::MatrixMut<Elem = S>,
        {
            fn mul_assign(&mut self, scalar: S) {
                $crate::traits::MatrixMut::scale(self, scalar);
            }
        }

        impl<$($g)* S> ::std::ops::DivAssign<S> for $ty
        where
            S: $crate::element::Element,
            $ty: $crate::traits::MatrixMut<Elem = S>,
        {
            fn div_assign(&mut self, scalar: S) {
                if let Err(err) = $crate::traits::MatrixMut::try_div_assign(self, scalar) {
                    panic!("{}", err);
                }
            }
        }
    };
}
