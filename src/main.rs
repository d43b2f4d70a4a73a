use classic_algorithms::array::{self, PrefixSum};
use classic_algorithms::linked::SinglyLinkedList;
use classic_algorithms::string;

fn main() {
    println!("\n[Search]\n");

    let sorted = (0..1000).map(|i| i * 3).collect::<Vec<i64>>();
    println!("linear:        {:?}", array::linear(&sorted, &993));
    println!("binary:        {:?}", array::binary(&sorted, &993));
    println!("exponential:   {:?}", array::exponential(&sorted, &993));
    println!("jump:          {:?}", array::jump(&sorted, &993));
    println!("interpolation: {:?}", array::interpolation(&sorted, &993));
    println!("missing:       {:?}", array::binary(&sorted, &994));

    println!("\n[Sort]\n");

    let unsorted = [5, -3, 9, -24, 9, 0, 0, 1, 3, 15, 90, -2];
    let mut hoare = unsorted;
    array::hoare_quick_sort(&mut hoare);
    let mut lomuto = unsorted;
    array::lomuto_quick_sort(&mut lomuto);
    println!("hoare:  {hoare:?}");
    println!("lomuto: {lomuto:?}");
    println!("merge:  {:?}", array::merge_sort(&unsorted));
    let mut select = unsorted;
    println!("median: {:?}", array::quick_select(&mut select, unsorted.len() / 2));

    println!("\n[Subarray]\n");

    let values = [5, -3, 9, -24, 9, 0, -1, 1, -3, 15, 16, 2];
    let sums = PrefixSum::new(&values);
    println!("{sums:?}");
    println!("sum of 4..=11: {}", sums.range(4, 11));
    println!("max subarray:  {:?}", array::max_subarray(&values));
    println!("runs summing to 2: {}", array::counting_subarrays(&values, 2));
    println!("runs XORing to 6:  {}", array::counting_xor_subarrays(&[4, 2, 2, 6, 4], 6));

    println!("\n[Linked List]\n");

    let mut list = [3, -26, 0, 1, 1, 19, -9, 5, 0].into_iter().collect::<SinglyLinkedList<i32>>();
    println!("{list}");
    println!("middle: {:?}", list.middle());
    list.merge_sort();
    println!("sorted: {list}");
    let other = list.split_half();
    println!("halves: {list} | {other}");
    list.reverse();
    println!("reversed: {list}");
    list.link_tail_to(0).expect("the list isn't empty");
    println!("cycle: {}", list.has_cycle());
    println!("{list:?}");

    println!("\n[String]\n");

    let text = "The roots of education are bitter, but the fruit is sweet";
    println!("longest unique: {:?}", string::longest_unique_substring(text));
    println!("rabin karp:     {:?}", string::rabin_karp(text, "are bit"));
}
