use crate::Parser;

/// Runs every parser of a tuple in order and collects their outputs into a tuple of the same arity.
pub struct Tuple<T> {
    parsers: T,
}

macro_rules! impl_tuple {
    ($(($index:tt, $parser:ident)),+) => {
        impl<C, $($parser),+> Parser<C> for Tuple<($($parser,)+)>
        where
            C: ?Sized,
            $($parser: Parser<C>,)+
        {
            type Output = ($(<$parser as Parser<C>>::Output,)+);

            fn parse(&mut self, context: &mut C) -> Result<Self::Output, ()> {
                Ok(($(self.parsers.$index.parse(context)?,)+))
            }
        }
    };
}

impl_tuple!((0, P0), (1, P1), (2, P2));

pub const fn tuple<T>(parsers: T) -> Tuple<T> {
    Tuple { parsers }
}
