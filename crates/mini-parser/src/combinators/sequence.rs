use crate::Parser;

/// Runs `left` then `right`, keeping the output of `right`.
pub struct Preceded<P, Q>
where
    Q: ?Sized,
{
    left: P,
    right: Q,
}

impl<C, P, Q> Parser<C> for Preceded<P, Q>
where
    C: ?Sized,
    P: Parser<C>,
    Q: Parser<C> + ?Sized,
{
    type Output = Q::Output;

    fn parse(&mut self, context: &mut C) -> Result<Self::Output, ()> {
        self.left.parse(context)?;
        self.right.parse(context)
    }
}

pub const fn preceded<C, P, Q>(left: P, right: Q) -> Preceded<P, Q>
where
    C: ?Sized,
    P: Parser<C>,
    Q: Parser<C>,
{
    Preceded { left, right }
}

/// Runs `left` then `right`, keeping the output of `left`.
pub struct Terminated<P, Q>
where
    Q: ?Sized,
{
    left: P,
    right: Q,
}

impl<C, P, Q> Parser<C> for Terminated<P, Q>
where
    C: ?Sized,
    P: Parser<C>,
    Q: Parser<C> + ?Sized,
{
    type Output = P::Output;

    fn parse(&mut self, context: &mut C) -> Result<Self::Output, ()> {
        let output = self.left.parse(context)?;

        self.right.parse(context)?;

        Ok(output)
    }
}

pub const fn terminated<C, P, Q>(left: P, right: Q) -> Terminated<P, Q>
where
    C: ?Sized,
    P: Parser<C>,
    Q: Parser<C>,
{
    Terminated { left, right }
}
