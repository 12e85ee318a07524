error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Regex(::regex::Error);
    }

    errors {
        InvalidOffset(offset: usize, len: usize) {
            description("search offset is past the end of the sequence")
            display("search offset {} is past the end of a sequence of length {}", offset, len)
        }

        InvalidSite(name: String, site: String) {
            description("invalid recognition site")
            display("enzyme {:?} has an invalid recognition site {:?}", name, site)
        }

        UnknownEnzyme(name: String) {
            description("unknown enzyme")
            display("unknown enzyme {:?}", name)
        }

        InvalidTable(line: usize, reason: String) {
            description("malformed enzyme table")
            display("malformed enzyme table at line {}: {}", line, reason)
        }
    }
}
