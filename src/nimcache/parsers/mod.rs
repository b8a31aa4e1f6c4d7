use crate::nimcache::VersionToken;
use crate::nimcache::context::Context;
use mini_parser::combinators::{preceded, terminated, tuple};
use mini_parser::{Parser, ParserExt};


// Primitive parsers.

fn take_while1<'a>(mut predicate: impl FnMut(char) -> bool) -> impl FnMut(&mut Context<'a>) -> Result<&'a str, ()> {
    move |context: &mut Context<'a>| {
        let taken = context.take_while(&mut predicate);

        if taken.is_empty() { Err(()) } else { Ok(taken) }
    }
}

fn tag<'a>(c: char) -> impl FnMut(&mut Context<'a>) -> Result<(), ()> {
    move |context: &mut Context<'a>| if context.eat(c) { Ok(()) } else { Err(()) }
}

fn eof(context: &mut Context<'_>) -> Result<(), ()> {
    if context.data.is_empty() { Ok(()) } else { Err(()) }
}

fn digit1<'a>(context: &mut Context<'a>) -> Result<&'a str, ()> {
    take_while1(|c| c.is_ascii_digit()).parse(context)
}

/// Runs `parser` on `data` and requires it to consume everything.
fn parse_complete<'a, P>(parser: P, data: &'a str) -> Result<P::Output, ()>
where
    P: Parser<Context<'a>>,
{
    terminated(parser, eof).parse(&mut Context::new(data))
}

// Version token grammar.

const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-')
}

/// `[A-Za-z_][A-Za-z0-9_-]*`
fn parse_identifier<'a>(context: &mut Context<'a>) -> Result<&'a str, ()> {
    take_while1(is_identifier_continue)
        .map_opt(|_: &mut Context<'a>, name: &'a str| name.starts_with(is_identifier_start).then_some(name))
        .parse(context)
}

/// `major.minor.patch`
fn parse_version<'a>(context: &mut Context<'a>) -> Result<(&'a str, &'a str, &'a str), ()> {
    tuple((digit1, preceded(tag('.'), digit1), preceded(tag('.'), digit1))).parse(context)
}

fn parse_build<'a>(context: &mut Context<'a>) -> Result<&'a str, ()> {
    take_while1(char::is_alphanumeric).parse(context)
}

pub fn parse_version_token(segment: &str) -> Result<VersionToken<'_>, ()> {
    // Split on the last two hyphens at most. Any hyphen before them belongs to the name.
    let mut parts = segment.rsplitn(3, '-');

    let (name, version, build) = match (parts.next(), parts.next(), parts.next()) {
        (Some(version), Some(name), None) => (name, version, None),
        (Some(build), Some(version), Some(name)) => (name, version, Some(build)),
        _ => return Err(()),
    };

    let name = parse_complete(parse_identifier, name)?;
    let (major, minor, patch) = parse_complete(parse_version, version)?;
    let build = build.map(|build| parse_complete(parse_build, build)).transpose()?;

    Ok(VersionToken {
        name,
        major,
        minor,
        patch,
        build,
    })
}
