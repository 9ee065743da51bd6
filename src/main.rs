// src/main.rs
//
// Runs the literal-input scenario suite against the crate's own parser
// and document implementation.

use kvjson::harness::{assert_equal, assert_not_null, DefaultFactory, Harness};

fn main() {
    let mut harness = Harness::new();

    harness.add("Empty Object", |factory| {
        let parser = factory.parser();
        let obj = parser.parse("{ }")?;

        assert_equal(0, obj.string_keys().len())?;
        assert_equal(0, obj.object_keys().len())
    });

    harness.add("String Value", |factory| {
        let parser = factory.parser();
        let obj = parser.parse("{ \"name\":\"sam doe\" }")?;

        assert_equal("sam doe", assert_not_null(obj.get_string("name"))?)
    });

    harness.add("Object Value", |factory| {
        let parser = factory.parser();
        let obj = parser.parse("{ \"name\":{\"first\":\"sam\", \"last\":\"doe\" } }")?;

        let name = assert_not_null(obj.get_object("name"))?;
        assert_equal("sam", assert_not_null(name.get_string("first"))?)?;
        assert_equal("doe", assert_not_null(name.get_string("last"))?)
    });

    harness.add("Multiple Nested Objects", |factory| {
        let parser = factory.parser();
        let obj = parser.parse(
            "{ \"firstObj\" : { \"firstOfFirstObj\" :{ \"1-1\" : \"yay \" , \"1-2\" : \" secondOfFirst\"}, \
             \"secondOfFirstObj\": {\"1-3\" : \"thirdItem\", \"1-4\" :\"SS\"}} , \"secondObj\" :\
             {\"firstOfSecondObj\" : {\"2-1\":\"food\" ,\"2-2\":\"moo\"}, \
             \"secondOfSecondObj\" : {\"2-3\":\"yikes\", \"2-4\":\"complex\"}}}",
        )?;

        let first = assert_not_null(obj.get_object("firstObj"))?;
        let second = assert_not_null(obj.get_object("secondObj"))?;

        assert_equal(2, first.object_keys().len())?;
        assert_equal(2, second.object_keys().len())?;

        let first_of_first = assert_not_null(first.get_object("firstOfFirstObj"))?;
        assert_equal("yay ", assert_not_null(first_of_first.get_string("1-1"))?)?;
        assert_equal(" secondOfFirst", assert_not_null(first_of_first.get_string("1-2"))?)?;

        let second_of_first = assert_not_null(first.get_object("secondOfFirstObj"))?;
        assert_equal("thirdItem", assert_not_null(second_of_first.get_string("1-3"))?)?;
        assert_equal("SS", assert_not_null(second_of_first.get_string("1-4"))?)?;

        let first_of_second = assert_not_null(second.get_object("firstOfSecondObj"))?;
        assert_equal("food", assert_not_null(first_of_second.get_string("2-1"))?)?;
        assert_equal("moo", assert_not_null(first_of_second.get_string("2-2"))?)?;

        let second_of_second = assert_not_null(second.get_object("secondOfSecondObj"))?;
        assert_equal("yikes", assert_not_null(second_of_second.get_string("2-3"))?)?;
        assert_equal("complex", assert_not_null(second_of_second.get_string("2-4"))?)
    });

    harness.add("Strange Spacing", |factory| {
        let parser = factory.parser();
        let obj = parser.parse("{\n \"name\":{\"first\":\"sam\"\n,      \"last\"\n:\"doe\" } }")?;

        let name = assert_not_null(obj.get_object("name"))?;
        assert_equal("sam", assert_not_null(name.get_string("first"))?)?;
        assert_equal("doe", assert_not_null(name.get_string("last"))?)
    });

    let report = harness.run(&DefaultFactory);
    for (name, result) in report.outcomes() {
        match result {
            Ok(()) => println!("PASS  {name}"),
            Err(failure) => println!("FAIL  {name}: {failure}"),
        }
    }
    println!("{} passed, {} failed", report.passed(), report.failed());

    if !report.all_passed() {
        std::process::exit(1);
    }
}
