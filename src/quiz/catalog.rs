//! The fixed 50-question aptitude catalog

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Quantitative,
    Logical,
    Verbal,
    Data,
    Technical,
    Pattern,
    Problem,
    #[serde(rename = "GK")]
    GeneralKnowledge,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Quantitative => "Quantitative",
            Category::Logical => "Logical",
            Category::Verbal => "Verbal",
            Category::Data => "Data Interpretation",
            Category::Technical => "Technical",
            Category::Pattern => "Pattern Recognition",
            Category::Problem => "Problem Solving",
            Category::GeneralKnowledge => "General Knowledge",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: u8,
    pub category: Category,
}

const fn q(
    id: u32,
    text: &'static str,
    options: [&'static str; 4],
    correct_answer: u8,
    category: Category,
) -> Question {
    Question {
        id,
        text,
        options,
        correct_answer,
        category,
    }
}

use Category::*;

pub const QUESTION_COUNT: usize = 50;

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    q(1, "If 20% of a number is 40, what is 50% of that number?", ["80", "100", "120", "200"], 1, Quantitative),
    q(2, "A train travels 60 km in 45 minutes. What is its speed in km/h?", ["70", "75", "80", "85"], 2, Quantitative),
    q(3, "What is the next number in the sequence: 2, 6, 12, 20, 30, __?", ["40", "42", "44", "48"], 1, Quantitative),
    q(4, "If the price of a product is increased by 20% and then decreased by 20%, what is the net change?", ["-4%", "0%", "2%", "4%"], 0, Quantitative),
    q(5, "A person invests ₹10,000 at 10% simple interest per annum. What will be the amount after 2 years?", ["₹11,000", "₹12,000", "₹12,100", "₹13,000"], 1, Quantitative),
    q(6, "If all Bloops are Razzies and all Razzies are Lazzies, then all Bloops are definitely Lazzies.", ["True", "False", "Cannot say", "None"], 0, Logical),
    q(7, "Complete the analogy: Book : Pages :: Tree : __?", ["Leaves", "Branches", "Roots", "Trunk"], 0, Logical),
    q(8, "If CAT = 24, DOG = 26, then COW = ?", ["34", "30", "28", "32"], 0, Logical),
    q(9, "If 5 workers can complete a job in 12 days, how many days will 3 workers take?", ["15", "18", "20", "24"], 2, Logical),
    q(10, "Which number does not belong: 2, 3, 6, 7, 8, 14, 15, 30", ["6", "8", "14", "30"], 1, Logical),
    q(11, "Choose the word most similar to 'Eloquent':", ["Fluent", "Silent", "Awkward", "Hesitant"], 0, Verbal),
    q(12, "Find the odd one out:", ["Triangle", "Rectangle", "Circle", "Square"], 2, Verbal),
    q(13, "Complete: Pen : Write :: Knife : __?", ["Cut", "Sharp", "Steel", "Handle"], 0, Verbal),
    q(14, "Antonym of 'ABUNDANCE':", ["Plenty", "Scarcity", "Wealth", "Excess"], 1, Verbal),
    q(15, "If ROPE is coded as ENOD, how is CHAIR coded?", ["ZIBFW", "DIBHS", "DIBJS", "EJBIS"], 0, Verbal),
    q(16, "A pie chart shows Sales: 40%, Marketing: 30%, R&D: 20%, Others: 10%. If total budget is ₹100000, what is R&D budget?", ["₹15000", "₹20000", "₹25000", "₹30000"], 1, Data),
    q(17, "If the average of 5 numbers is 40, and four of them are 38, 42, 45, and 35, what is the fifth number?", ["35", "40", "45", "50"], 1, Data),
    q(18, "In a class, 60% are boys. If there are 24 girls, how many total students?", ["40", "50", "60", "80"], 2, Data),
    q(19, "A shopkeeper marks up goods by 40% but gives 20% discount. What is his profit %?", ["10%", "12%", "15%", "20%"], 1, Data),
    q(20, "If population grows at 5% per year, after 2 years 1000 becomes:", ["1100", "1102.5", "1105", "1150"], 1, Data),
    q(21, "What is the time complexity of binary search?", ["O(n)", "O(log n)", "O(n²)", "O(1)"], 1, Technical),
    q(22, "Which data structure uses LIFO?", ["Queue", "Stack", "Array", "Tree"], 1, Technical),
    q(23, "What does SQL stand for?", ["Structured Query Language", "Simple Query Language", "Standard Query Language", "System Query Language"], 0, Technical),
    q(24, "In JavaScript, what is the result of: typeof null?", ["null", "undefined", "object", "number"], 2, Technical),
    q(25, "Which HTTP method is used to update data?", ["GET", "POST", "PUT", "DELETE"], 2, Technical),
    q(26, "What comes next: 1, 4, 9, 16, 25, __?", ["30", "35", "36", "49"], 2, Pattern),
    q(27, "Complete: A1, B2, C6, D24, E__?", ["48", "96", "120", "144"], 2, Pattern),
    q(28, "What is missing: 3, 6, 11, 18, 27, __?", ["36", "38", "39", "40"], 1, Pattern),
    q(29, "Continue the series: Z, Y, X, W, V, __?", ["T", "U", "S", "R"], 1, Pattern),
    q(30, "Pattern: 5, 10, 20, 40, 80, __?", ["120", "140", "160", "200"], 2, Pattern),
    q(31, "A clock shows 3:15. What is the angle between hour and minute hands?", ["0°", "7.5°", "15°", "22.5°"], 1, Problem),
    q(32, "How many squares are there on a chess board?", ["64", "84", "100", "204"], 3, Problem),
    q(33, "If it takes 5 machines 5 minutes to make 5 widgets, how long would it take 100 machines to make 100 widgets?", ["5 min", "20 min", "100 min", "500 min"], 0, Problem),
    q(34, "A bat and ball cost ₹110 total. The bat costs ₹100 more than the ball. How much does the ball cost?", ["₹5", "₹10", "₹15", "₹20"], 0, Problem),
    q(35, "You have 12 balls. One is heavier. Minimum weighings on a balance to find it?", ["2", "3", "4", "5"], 1, Problem),
    q(36, "Who is known as the father of Computer Science?", ["Steve Jobs", "Bill Gates", "Alan Turing", "Tim Berners-Lee"], 2, GeneralKnowledge),
    q(37, "What year was the first iPhone released?", ["2005", "2006", "2007", "2008"], 2, GeneralKnowledge),
    q(38, "What does API stand for?", ["Application Programming Interface", "Advanced Programming Interface", "Automated Programming Interface", "Application Protocol Interface"], 0, GeneralKnowledge),
    q(39, "Which company developed the Java programming language?", ["Microsoft", "Sun Microsystems", "Oracle", "IBM"], 1, GeneralKnowledge),
    q(40, "What is the full form of HTML?", ["Hyper Text Markup Language", "High Text Markup Language", "Hyper Transfer Markup Language", "Home Tool Markup Language"], 0, GeneralKnowledge),
    q(41, "If 3x + 5 = 20, what is x?", ["3", "4", "5", "6"], 2, Quantitative),
    q(42, "The sum of three consecutive even numbers is 66. What is the largest number?", ["20", "22", "24", "26"], 2, Quantitative),
    q(43, "A man can row 30 km downstream and 20 km upstream in 7 hours. Speed of stream is 5 km/h. What is his rowing speed in still water?", ["10", "12", "15", "20"], 0, Quantitative),
    q(44, "If A:B = 2:3 and B:C = 4:5, then A:C = ?", ["8:15", "4:5", "2:3", "6:5"], 0, Logical),
    q(45, "Which of the following is not a programming paradigm?", ["Object-Oriented", "Functional", "Procedural", "Sequential"], 3, Technical),
    q(46, "What is recursion in programming?", ["A loop", "A function calling itself", "A data structure", "An algorithm"], 1, Technical),
    q(47, "Find the odd one: Python, Java, C++, HTML, JavaScript", ["Python", "Java", "HTML", "JavaScript"], 2, Technical),
    q(48, "What is cloud computing?", ["Internet storage", "On-demand computing resources", "Weather prediction", "Data encryption"], 1, Technical),
    q(49, "Which company owns GitHub?", ["Google", "Facebook", "Microsoft", "Amazon"], 2, GeneralKnowledge),
    q(50, "What does CSS stand for?", ["Cascading Style Sheets", "Creative Style Sheets", "Computer Style Sheets", "Colorful Style Sheets"], 0, GeneralKnowledge),
];

pub fn questions() -> &'static [Question] {
    &QUESTIONS
}
