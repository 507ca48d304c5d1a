// HTML bodies of the students resource. Values are written as given, without escaping.

use crate::modules::students::core::errors::ErrorKind;
use crate::modules::students::core::student::Student;

const EMPTY_LIST: &str = "<title>Список студентов</title>\n<h2>Список студентов пуст</h2>\n";

const TABLE_HEAD: &str = "<title>Список студентов</title>\n\
<h2>Список студентов</h2>\n\
<table style='width: 50%; border: 1px solid black; border-collapse: collapse'>\n  \
<col style='width: 60%; border: 1px solid black'/><col/>\n  ";

const TABLE_TAIL: &str = "</table>\n";

pub fn render_student_list(students: &[Student]) -> String {
    if students.is_empty() {
        return EMPTY_LIST.to_string();
    }
    let rows: String = students
        .iter()
        .map(|student| format!("<tr><td>{}</td><td>{}</td></tr>\n", student.name, student.group))
        .collect();
    format!("{TABLE_HEAD}{rows}{TABLE_TAIL}")
}

pub fn render_error(kind: ErrorKind, reason: &str) -> String {
    format!("<h2>ERROR {kind}</h2>\n<p>{reason}</p>\n")
}
