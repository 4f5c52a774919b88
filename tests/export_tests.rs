use zipf_analyzer::{analyze_word_counts, write_ranked_points_csv, Error, SourceInfo, WordCount};

#[cfg(test)]
mod ranked_points_csv_tests {
    use super::*;

    #[test]
    fn test_writes_header_and_rows() {
        let word_counts = vec![
            WordCount::new("the", 100),
            WordCount::new("of", 50),
            WordCount::new("and", 33),
        ];
        let result = analyze_word_counts("csv", SourceInfo::default(), word_counts).unwrap();

        let mut output = Vec::new();
        write_ranked_points_csv(result.ranked_points(), &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Rank,Word,ActualFrequency,LogRank,LogFrequency,IdealFrequency,FittedFrequency,PercentDivergenceFromIdeal"
        );
        assert_eq!(lines[1], "1,the,100,0.0000,2.0000,100.00,100.15,0.00");
        assert_eq!(lines[3], "3,and,33,0.4771,1.5185,33.33,33.09,-1.01");
    }

    #[test]
    fn test_quotes_words_when_needed() {
        let word_counts = vec![
            WordCount::new("say \"hi\"", 4),
            WordCount::new("a,b", 2),
        ];
        let result = analyze_word_counts("csv", SourceInfo::default(), word_counts).unwrap();

        let mut output = Vec::new();
        write_ranked_points_csv(result.ranked_points(), &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        assert!(csv.contains("1,\"say \"\"hi\"\"\",4,"));
        assert!(csv.contains("2,\"a,b\",2,"));
    }

    #[test]
    fn test_empty_points_are_no_data() {
        let mut output = Vec::new();

        let result = write_ranked_points_csv(&[], &mut output);

        assert!(matches!(result, Err(Error::NoData)));
        assert!(output.is_empty());
    }
}
