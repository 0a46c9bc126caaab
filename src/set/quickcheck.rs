use compare::Compare;
use quickcheck::{Arbitrary, Gen};
use super::Set;

impl<T, C> Arbitrary for Set<T, C>
    where T: Arbitrary, C: 'static + Clone + Compare<T> + Default + Send {

    fn arbitrary(g: &mut Gen) -> Self {
        Vec::<T>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let vec: Vec<T> = self.clone().into_iter().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
