use crate::commands::add::ADD_PERSON_USAGE;
use crate::commands::list::FIND_USAGE;
use crate::commands::remark::REMARK_USAGE;
use crate::commands::{AddCommand, FindCommand, RemarkCommand};
use crate::models::{Address, Birthday, Email, Name, Person, Phone, Remark};

use super::error::ParseError;
use super::fields::{parse_index, parse_tags};
use super::syntax::{
    ADD_PERSON_FIELDS, PREFIX_ADDRESS, PREFIX_BIRTHDAY, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_REMARK, PREFIX_TAG,
};
use super::tokenizer::tokenize;

pub fn parse_add_person(args: &str) -> Result<AddCommand<Person>, ParseError> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_BIRTHDAY,
            PREFIX_TAG,
            PREFIX_REMARK,
        ],
    );
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: ADD_PERSON_USAGE,
        });
    }
    if let Some(field) = map.first_missing(&ADD_PERSON_FIELDS) {
        return Err(ParseError::MissingField { field });
    }
    map.verify_no_duplicates(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_BIRTHDAY,
        PREFIX_REMARK,
    ])?;

    let [name, phone, email, address] = ADD_PERSON_FIELDS;
    let name = Name::parse(map.require(name)?)?;
    let phone = Phone::parse(map.require(phone)?)?;
    let email = Email::parse(map.require(email)?)?;
    let address = Address::parse(map.require(address)?)?;
    let birthday = match map.value(PREFIX_BIRTHDAY) {
        Some(text) => Birthday::parse(text)?,
        None => None,
    };
    let tags = parse_tags(map.all_values(PREFIX_TAG))?;
    let remark = Remark::new(map.value(PREFIX_REMARK).unwrap_or_default());

    Ok(AddCommand::new(Person::new(
        name, phone, email, address, birthday, tags, remark,
    )))
}

pub fn parse_find(args: &str) -> Result<FindCommand, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat { usage: FIND_USAGE });
    }
    Ok(FindCommand::new(keywords))
}

pub fn parse_remark(args: &str) -> Result<RemarkCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_REMARK]);
    let index = parse_index(map.preamble()).map_err(|_| ParseError::InvalidFormat {
        usage: REMARK_USAGE,
    })?;
    let remark = map.require((PREFIX_REMARK, "remark"))?;
    map.verify_no_duplicates(&[PREFIX_REMARK])?;
    Ok(RemarkCommand::new(index, Remark::new(remark)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Tag, ValidationError};
    use rstest::rstest;

    const AMY: &str = " n/Amy Bee p/11111111 e/amy@example.com a/Block 312, Amy Street 1";

    #[test]
    fn all_fields_present() {
        let command = parse_add_person(&format!(
            "{AMY} b/2000-01-31 r/Met at the viewing t/friend t/buyer"
        ))
        .unwrap();
        let person = command.entity();
        assert_eq!(person.name().as_str(), "Amy Bee");
        assert_eq!(person.phone().as_str(), "11111111");
        assert_eq!(person.address().as_str(), "Block 312, Amy Street 1");
        assert_eq!(person.birthday().map(|b| b.to_string()), Some("2000-01-31".to_string()));
        assert_eq!(person.remark().as_str(), "Met at the viewing");
        assert!(person.tags().contains(&Tag::parse("buyer").unwrap()));
        assert_eq!(person.tags().len(), 2);
    }

    #[test]
    fn optional_fields_may_be_left_out() {
        let person = parse_add_person(AMY).unwrap().entity().clone();
        assert_eq!(person.birthday(), None);
        assert!(person.tags().is_empty());
        assert!(person.remark().is_empty());
    }

    #[rstest]
    #[case(" p/11111111 e/amy@example.com a/Somewhere", "name")]
    #[case(" n/Amy e/amy@example.com a/Somewhere", "phone")]
    #[case(" n/Amy p/11111111 a/Somewhere", "email")]
    #[case(" n/Amy p/11111111 e/amy@example.com", "address")]
    #[case("", "name")]
    fn reports_first_missing_field(#[case] args: &str, #[case] field: &'static str) {
        assert_eq!(parse_add_person(args), Err(ParseError::MissingField { field }));
    }

    #[test]
    fn non_empty_preamble_is_rejected() {
        assert_eq!(
            parse_add_person(&format!("preamble{AMY}")),
            Err(ParseError::InvalidFormat {
                usage: ADD_PERSON_USAGE
            })
        );
    }

    #[test]
    fn repeated_single_valued_fields_are_rejected() {
        assert_eq!(
            parse_add_person(&format!("{AMY} n/Bob p/22222222")),
            Err(ParseError::DuplicatePrefix {
                prefixes: "n/ p/".into()
            })
        );
    }

    #[rstest]
    #[case(" n/R@chel p/1 e/a@b.co a/x", ValidationError::InvalidName)]
    #[case(" n/Élodie p/123 e/amy@example.com a/x", ValidationError::InvalidName)]
    #[case(" n/Amy p/12 e/amy@example.com a/x", ValidationError::InvalidPhone)]
    #[case(" n/Amy p/123 e/amy a/x", ValidationError::InvalidEmail)]
    #[case(" n/Amy p/123 e/amy@example.com a/x t/hubby*", ValidationError::InvalidTag)]
    fn invalid_values_are_rejected(#[case] args: &str, #[case] expected: ValidationError) {
        assert_eq!(parse_add_person(args), Err(ParseError::Validation(expected)));
    }

    #[test]
    fn birthday_must_be_a_date() {
        assert_eq!(
            parse_add_person(&format!("{AMY} b/31-01-2000")),
            Err(ParseError::InvalidDate { field: "birthday" })
        );
    }

    #[test]
    fn find_splits_keywords() {
        assert_eq!(
            parse_find(" Alice \t Bob "),
            Ok(FindCommand::new(vec!["Alice".into(), "Bob".into()]))
        );
        assert_eq!(
            parse_find("   "),
            Err(ParseError::InvalidFormat { usage: FIND_USAGE })
        );
    }

    #[test]
    fn remark_takes_index_and_text() {
        assert_eq!(
            parse_remark(" 2 r/Likes to swim."),
            Ok(RemarkCommand::new(2, Remark::new("Likes to swim.")))
        );
        assert_eq!(
            parse_remark(" 1 r/"),
            Ok(RemarkCommand::new(1, Remark::default()))
        );
    }

    #[test]
    fn remark_without_prefix_is_missing_remark() {
        assert_eq!(
            parse_remark(" 1"),
            Err(ParseError::MissingField { field: "remark" })
        );
    }

    #[rstest]
    #[case(" r/hello")]
    #[case(" 0 r/hello")]
    #[case(" abc r/hello")]
    fn remark_needs_a_valid_index(#[case] args: &str) {
        assert_eq!(
            parse_remark(args),
            Err(ParseError::InvalidFormat {
                usage: REMARK_USAGE
            })
        );
    }
}
