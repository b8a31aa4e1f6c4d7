#![expect(missing_docs, clippy::missing_errors_doc, reason = "internal create")]

//! A tiny parser combinator library. Parsers read from a mutable context and either produce a value or fail with `()`.
//! Failure carries no information: callers decide what a mismatch means.

use self::combinators::MapOpt;

pub mod combinators;

pub trait Parser<C>
where
    C: ?Sized,
{
    type Output;

    #[expect(clippy::result_unit_err, reason = "internal usage")]
    fn parse(&mut self, context: &mut C) -> Result<Self::Output, ()>;
}

impl<C, F, T> Parser<C> for F
where
    C: ?Sized,
    F: FnMut(&mut C) -> Result<T, ()>,
{
    type Output = T;

    fn parse(&mut self, context: &mut C) -> Result<Self::Output, ()> {
        self(context)
    }
}

pub trait ParserExt<C>: Parser<C>
where
    C: ?Sized,
{
    fn map_opt<F, T>(self, f: F) -> MapOpt<Self, F>
    where
        Self: Sized,
        F: FnMut(&mut C, Self::Output) -> Option<T>,
    {
        combinators::map_opt(self, f)
    }
}

impl<C, P> ParserExt<C> for P
where
    C: ?Sized,
    P: Parser<C>,
{
}

#[cfg(test)]
mod tests {
    use crate::combinators::{preceded, terminated, tuple};
    use crate::{Parser, ParserExt};

    fn byte(expected: u8) -> impl FnMut(&mut &[u8]) -> Result<u8, ()> {
        move |input: &mut &[u8]| match input.split_first() {
            Some((&first, rest)) if first == expected => {
                *input = rest;

                Ok(first)
            }
            _ => Err(()),
        }
    }

    fn end(input: &mut &[u8]) -> Result<(), ()> {
        if input.is_empty() { Ok(()) } else { Err(()) }
    }

    #[test]
    fn test_tuple() {
        let mut parser = tuple((byte(b'a'), byte(b'b'), byte(b'c')));

        let mut input = b"abcd".as_slice();

        assert_eq!(parser.parse(&mut input), Ok((b'a', b'b', b'c')));
        assert_eq!(input, b"d");

        assert_eq!(parser.parse(&mut b"abd".as_slice()), Err(()));
    }

    #[test]
    fn test_preceded_terminated() {
        let mut parser = terminated(preceded(byte(b'('), byte(b'x')), byte(b')'));

        assert_eq!(parser.parse(&mut b"(x)".as_slice()), Ok(b'x'));
        assert_eq!(parser.parse(&mut b"(x".as_slice()), Err(()));
        assert_eq!(parser.parse(&mut b"x)".as_slice()), Err(()));
    }

    #[test]
    fn test_map_opt() {
        let mut parser = terminated(byte(b'7'), end).map_opt(|_: &mut &[u8], c: u8| c.checked_sub(b'0'));

        assert_eq!(parser.parse(&mut b"7".as_slice()), Ok(7));

        let mut parser = terminated(byte(b'7'), end).map_opt(|_: &mut &[u8], c: u8| (c == b'8').then_some(c));

        assert_eq!(parser.parse(&mut b"7".as_slice()), Err(()));
        assert_eq!(parser.parse(&mut b"77".as_slice()), Err(()));
    }
}
