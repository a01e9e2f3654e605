//! Shared-storage parameter tensor.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use ndarray::Array1;

use super::backward::BackwardOp;

/// A 1-D f32 tensor with optional gradient storage.
///
/// Data and gradient live behind `Rc<RefCell<...>>`, so `clone()` produces an
/// aliased handle rather than a copy. That is what lets the encoder and
/// decoder keep their parameters while the trainer holds the same tensors in
/// a flat list for clipping and optimizer steps.
#[derive(Clone)]
pub struct Tensor {
    data: Rc<RefCell<Array1<f32>>>,
    grad: Rc<RefCell<Option<Array1<f32>>>>,
    requires_grad: bool,
    backward_op: Option<Rc<dyn BackwardOp>>,
}

impl Tensor {
    /// Create a tensor from a vector of values
    pub fn from_vec(values: Vec<f32>, requires_grad: bool) -> Self {
        Self {
            data: Rc::new(RefCell::new(Array1::from_vec(values))),
            grad: Rc::new(RefCell::new(None)),
            requires_grad,
            backward_op: None,
        }
    }

    /// Create a zero-filled tensor of length `n`
    pub fn zeros(n: usize, requires_grad: bool) -> Self {
        Self::from_vec(vec![0.0; n], requires_grad)
    }

    /// Owned copy of the data
    pub fn data(&self) -> Array1<f32> {
        self.data.borrow().clone()
    }

    /// Borrow the data for reading
    pub fn data_ref(&self) -> Ref<'_, Array1<f32>> {
        self.data.borrow()
    }

    /// Borrow the data for in-place mutation
    pub fn data_mut(&self) -> RefMut<'_, Array1<f32>> {
        self.data.borrow_mut()
    }

    /// Owned copy of the gradient, if one has been set
    pub fn grad(&self) -> Option<Array1<f32>> {
        self.grad.borrow().clone()
    }

    /// Replace the gradient
    pub fn set_grad(&self, grad: Array1<f32>) {
        *self.grad.borrow_mut() = Some(grad);
    }

    /// Add into the gradient, initializing it if absent
    pub fn accumulate_grad(&self, grad: Array1<f32>) {
        let mut slot = self.grad.borrow_mut();
        match slot.as_mut() {
            Some(existing) => *existing = &*existing + &grad,
            None => *slot = Some(grad),
        }
    }

    /// Clear the gradient
    pub fn zero_grad(&self) {
        *self.grad.borrow_mut() = None;
    }

    /// Whether this tensor participates in gradient computation
    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    /// Whether the tensor holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Attach the backward op fired by [`crate::autograd::backward`]
    pub fn set_backward_op(&mut self, op: Rc<dyn BackwardOp>) {
        self.backward_op = Some(op);
    }

    /// The attached backward op, if any
    pub fn backward_op(&self) -> Option<Rc<dyn BackwardOp>> {
        self.backward_op.clone()
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("data", &*self.data.borrow())
            .field("grad", &*self.grad.borrow())
            .field("requires_grad", &self.requires_grad)
            .finish()
    }
}
