use crate::ExplainArgs;
use crate::error::CliError;

pub struct Topic {
    pub name: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
}

pub const TOPICS: &[Topic] = &[
    Topic {
        name: "value",
        summary: "pass-by-value: the callee works on its own copy",
        details: "\
The argument is handed over as a value. Whatever the callee does with it, \
the caller's own storage is untouched until the caller writes a returned \
value back. `increment` takes the old value and returns the new one; the \
driver decides to rebind its `x` slot with the result.",
    },
    Topic {
        name: "reference",
        summary: "pass-by-reference, rebuilt as pass-and-return",
        details: "\
Instead of aliasing the caller's storage, an operation that wants to \
change two variables takes both values and returns both, reordered or \
rewritten. `swap` hands its two strings back in the opposite order and \
the caller assigns them to its own slots.",
    },
    Topic {
        name: "output",
        summary: "output-only results as one structured value",
        details: "\
An operation with several results returns one record holding all of \
them. `split` produces a `SplitName` with both halves of a full name; \
the record cannot exist with a missing field, so every output is \
assigned by construction. On the storage side, a slot declared without \
a value must be written before its first checked read.",
    },
    Topic {
        name: "discard",
        summary: "ignoring an output by not capturing it",
        details: "\
A caller that is only interested in part of a structured result \
destructures the fields it wants and leaves the rest unbound: \
`let SplitName { first, .. } = split(name)?`. Nothing marks the call \
site beyond the missing capture.",
    },
    Topic {
        name: "variadic",
        summary: "any number of trailing arguments as one sequence",
        details: "\
`sum` accepts anything that can be walked as a sequence of integers, \
so the call site may build the sequence inline or prepare it earlier; \
an empty sequence sums to zero.",
    },
];

pub fn explain_command(args: ExplainArgs) -> Result<(), CliError> {
    explain(&args.topic)
}

pub(crate) fn explain(topic: &str) -> Result<(), CliError> {
    match lookup(topic) {
        None => {
            eprintln!("no discipline named `{topic}`");
            eprintln!("try one of: {}", topic_names().join(", "));
            Err(CliError::UnknownTopic(topic.into()))
        }
        Some(topic) => {
            println!("{}\n", topic.summary);
            println!("{}", topic.details);
            Ok(())
        }
    }
}

pub fn lookup(name: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| topic.name == name)
}

fn topic_names() -> Vec<&'static str> {
    TOPICS.iter().map(|topic| topic.name).collect()
}
