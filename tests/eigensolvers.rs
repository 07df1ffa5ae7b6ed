//! Integration tests for the Hermitian eigensolver backends

mod common;

use common::{assert_allclose_f64, lcg_matrix, orthonormality_error};
use gramsvd::algorithm::iterative::{
    EigenPairs, EigenRequest, WhichEigenvalues, hermitian_eig, select_eigenvalues,
};
use gramsvd::prelude::*;

/// Reference backend: materialize the operator and diagonalize it densely
struct DenseReference;

impl<T: Element> EigenSource<T> for DenseReference {
    fn eigsh<O: LinearOperator<T> + ?Sized>(
        &self,
        a: &O,
        request: &EigenRequest<T>,
    ) -> Result<EigenPairs<T>> {
        let n = a.shape()[0];
        let full = a.matmat(&DenseMatrix::identity(n))?;
        let (values, vectors) = hermitian_eig(&full)?;
        let wanted = select_eigenvalues(&values, request.k, request.which);
        Ok(EigenPairs {
            eigenvalues: wanted.iter().map(|&i| values[i]).collect(),
            eigenvectors: vectors.select_columns(&wanted),
            iterations: 1,
            nconv: request.k,
        })
    }

    fn name(&self) -> &'static str {
        "dense"
    }
}

/// Symmetric positive semi-definite test matrix B^T B
fn spd(n: usize, seed: u64) -> DenseMatrix<f64> {
    let b = lcg_matrix(n + 5, n, seed);
    b.adjoint_matmul(&b).unwrap()
}

#[test]
fn test_backends_agree_on_spd_matrix() {
    let a = spd(40, 17);
    let mut request = EigenRequest::new(4);
    request.tol = 1e-10;

    let lanczos = Lanczos.eigsh(&a, &request).unwrap();
    let mut block_request = request.clone();
    block_request.tol = 1e-6;
    block_request.max_iter = Some(500);
    let lobpcg = Lobpcg.eigsh(&a, &block_request).unwrap();
    let dense = DenseReference.eigsh(&a, &request).unwrap();

    assert_allclose_f64(&lanczos.eigenvalues, &dense.eigenvalues, 1e-9, 0.0, "lanczos");
    assert_allclose_f64(&lobpcg.eigenvalues, &dense.eigenvalues, 1e-6, 0.0, "lobpcg");
    assert!(orthonormality_error(&lanczos.eigenvectors.columns()) < 1e-10);
    assert!(orthonormality_error(&lobpcg.eigenvectors.columns()) < 1e-8);
}

#[test]
fn test_lanczos_complex_hermitian_operator() {
    // Hermitian H = B^H B for complex B
    let re = lcg_matrix(14, 10, 1);
    let im = lcg_matrix(14, 10, 2);
    let b = DenseMatrix::from_fn(14, 10, |i, j| Complex128::new(re[(i, j)], im[(i, j)]));
    let h = b.adjoint_matmul(&b).unwrap();

    let mut request = EigenRequest::new(3);
    request.which = WhichEigenvalues::LargestAlgebraic;
    let result = Lanczos.eigsh(&h, &request).unwrap();
    let reference = DenseReference.eigsh(&h, &request).unwrap();

    assert_allclose_f64(&result.eigenvalues, &reference.eigenvalues, 1e-10, 0.0, "complex lanczos");
    assert!(orthonormality_error(&result.eigenvectors.columns()) < 1e-10);
}

#[test]
fn test_svds_with_custom_backend() {
    let a = lcg_matrix(12, 7, 4);
    let mut rng = seeded_rng(1);
    let custom = svds_with(&a, 3, &SvdsOptions::default(), &DenseReference, &mut rng).unwrap();
    let builtin = svds(&a, 3, &SvdsOptions::default()).unwrap();
    assert_allclose_f64(
        &custom.singular_values,
        &builtin.singular_values,
        1e-10,
        1e-12,
        "custom backend",
    );
    assert_eq!(custom.iterations, 1);
}

#[test]
fn test_backend_names() {
    assert_eq!(EigenSource::<f64>::name(&Lanczos), "lanczos");
    assert_eq!(EigenSource::<f64>::name(&Lobpcg), "lobpcg");
    assert_eq!(EigenSource::<f64>::name(&DenseReference), "dense");
}
