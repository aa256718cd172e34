/// External movement controller that must stand still during combat.
///
/// The host calls [`Mover::suspend`] before an encounter is built and
/// [`Mover::resume`] when it ends or is aborted, exactly once each.
pub trait Mover {
    fn suspend(&mut self);
    fn resume(&mut self);
}

impl<M: Mover + ?Sized> Mover for Box<M> {
    fn suspend(&mut self) {
        (**self).suspend();
    }

    fn resume(&mut self) {
        (**self).resume();
    }
}

impl<M: Mover + ?Sized> Mover for &mut M {
    fn suspend(&mut self) {
        (**self).suspend();
    }

    fn resume(&mut self) {
        (**self).resume();
    }
}
