/// A trait for objects that can be transformed by a given type.
pub trait Transformable<X>: Clone {
    fn transform(&mut self, transform: X);

    fn transformed(&self, transform: X) -> Self {
        let mut clone = self.clone();
        clone.transform(transform);
        clone
    }
}
