/// Trait for geometric primitives that can collide with other primitives.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}
